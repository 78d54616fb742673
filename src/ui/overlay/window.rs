//! Overlay window: borderless, topmost, click-through.
//!
//! Black is registered both as the class background and as the layered
//! color key, so every pixel the paint handler leaves untouched shows the
//! desktop beneath and never intercepts input.

use windows::core::w;
use windows::Win32::Foundation::{COLORREF, HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    BeginPaint, CreatePen, CreateSolidBrush, DeleteObject, Ellipse, EndPaint, GetStockObject,
    InvalidateRect, LineTo, MoveToEx, SelectObject, UpdateWindow, HDC, NULL_BRUSH, PAINTSTRUCT,
    PS_SOLID,
};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, GetClientRect, GetSystemMetrics, PostQuitMessage,
    RegisterClassW, SetLayeredWindowAttributes, ShowWindow, CS_HREDRAW, CS_VREDRAW, LWA_COLORKEY,
    SM_CXSCREEN, SM_CYSCREEN, SW_SHOW, WM_DESTROY, WM_PAINT, WNDCLASSW, WS_EX_LAYERED,
    WS_EX_TOPMOST, WS_EX_TRANSPARENT, WS_POPUP,
};

use super::renderer::{self, Primitive};
use crate::app::state;
use crate::model::ReticleConfig;

/// Create the overlay window covering the primary screen.
pub fn create() -> windows::core::Result<HWND> {
    unsafe {
        let instance = GetModuleHandleW(None)?;
        let class_name = w!("CrosshairOverlayClass");

        let wc = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(wndproc),
            hInstance: instance.into(),
            hbrBackground: CreateSolidBrush(COLORREF(0)),
            lpszClassName: class_name,
            ..Default::default()
        };
        RegisterClassW(&wc);

        let width = GetSystemMetrics(SM_CXSCREEN);
        let height = GetSystemMetrics(SM_CYSCREEN);

        let hwnd = CreateWindowExW(
            WS_EX_LAYERED | WS_EX_TRANSPARENT | WS_EX_TOPMOST,
            class_name,
            w!("Crosshair Overlay"),
            WS_POPUP,
            0,
            0,
            width,
            height,
            None,
            None,
            Some(instance.into()),
            None,
        )?;

        // Black pixels become fully transparent; only the reticle shows.
        SetLayeredWindowAttributes(hwnd, COLORREF(0), 0, LWA_COLORKEY)?;

        let _ = ShowWindow(hwnd, SW_SHOW);
        let _ = UpdateWindow(hwnd);
        Ok(hwnd)
    }
}

/// Schedule a repaint with the current active configuration.
///
/// The background erase repaints stale pixels with the color key, which
/// clears the previous shape.
pub fn invalidate() {
    let hwnd = state::overlay_hwnd();
    if !hwnd.is_invalid() {
        unsafe {
            let _ = InvalidateRect(Some(hwnd), None, true);
        }
    }
}

unsafe extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    match msg {
        WM_PAINT => {
            let mut ps = PAINTSTRUCT::default();
            let hdc = BeginPaint(hwnd, &mut ps);

            let mut rect = RECT::default();
            let _ = GetClientRect(hwnd, &mut rect);

            let config = state::with_settings(|s| *s.active());
            paint_reticle(hdc, &config, rect.right / 2, rect.bottom / 2);

            let _ = EndPaint(hwnd, &ps);
            LRESULT(0)
        }

        WM_DESTROY => {
            PostQuitMessage(0);
            LRESULT(0)
        }

        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

/// Stroke the laid-out primitives onto the paint DC.
///
/// Pen and brush exist only for this paint and are deleted before
/// returning.
unsafe fn paint_reticle(hdc: HDC, config: &ReticleConfig, cx: i32, cy: i32) {
    let color = COLORREF(config.color.to_colorref());
    let pen = CreatePen(PS_SOLID, config.thickness, color);
    let brush = CreateSolidBrush(color);
    let old_pen = SelectObject(hdc, pen.into());
    let old_brush = SelectObject(hdc, GetStockObject(NULL_BRUSH));

    for op in renderer::primitives(config, cx, cy) {
        match op {
            Primitive::Line { x0, y0, x1, y1 } => {
                let _ = MoveToEx(hdc, x0, y0, None);
                let _ = LineTo(hdc, x1, y1);
            }
            Primitive::Outline {
                left,
                top,
                right,
                bottom,
            } => {
                SelectObject(hdc, GetStockObject(NULL_BRUSH));
                let _ = Ellipse(hdc, left, top, right, bottom);
            }
            Primitive::Fill {
                left,
                top,
                right,
                bottom,
            } => {
                SelectObject(hdc, brush.into());
                let _ = Ellipse(hdc, left, top, right, bottom);
            }
        }
    }

    SelectObject(hdc, old_pen);
    SelectObject(hdc, old_brush);
    let _ = DeleteObject(pen.into());
    let _ = DeleteObject(brush.into());
}
