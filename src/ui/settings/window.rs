//! Settings panel: a form window editing the active reticle preset.
//!
//! Control events are translated into [`SettingsCommand`]s; every applied
//! command refreshes the affected controls and invalidates the overlay.
//! Closing the panel shuts the whole application down.

use std::cell::RefCell;

use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{COLORREF, HINSTANCE, HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::Graphics::Gdi::{GetStockObject, DEFAULT_GUI_FONT, HBRUSH, WHITE_BRUSH};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Controls::Dialogs::{ChooseColorW, CC_FULLOPEN, CC_RGBINIT, CHOOSECOLORW};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, GetDlgCtrlID, GetWindowTextW, LoadCursorW,
    MessageBoxW, PostQuitMessage, RegisterClassW, SendMessageW, SetWindowTextW, ShowWindow,
    CS_HREDRAW, CS_VREDRAW, CW_USEDEFAULT, HMENU, IDC_ARROW, IDYES, MB_ICONINFORMATION,
    MB_ICONWARNING, MB_OK, MB_YESNO, MESSAGEBOX_RESULT, MESSAGEBOX_STYLE, SW_MINIMIZE, SW_SHOW,
    WA_INACTIVE, WINDOW_EX_STYLE, WINDOW_STYLE, WM_ACTIVATE, WM_CLOSE, WM_COMMAND, WM_CREATE,
    WM_DESTROY, WM_HSCROLL, WM_SETFONT, WNDCLASSW, WS_BORDER, WS_CAPTION, WS_CHILD, WS_EX_TOPMOST,
    WS_MINIMIZEBOX, WS_OVERLAPPED, WS_SYSMENU, WS_TABSTOP, WS_VISIBLE,
};

use crate::app::state;
use crate::commands::SettingsCommand;
use crate::model::constants::*;
use crate::model::{Rgb, Shape};
use crate::parse_field_value;
use crate::storage;
use crate::ui::overlay;

/// Application version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

// Control IDs
const ID_PRESET_COMBO: i32 = 101;
const ID_SAVE_BUTTON: i32 = 102;
const ID_RESET_BUTTON: i32 = 103;
const ID_SIZE_SLIDER: i32 = 104;
const ID_SIZE_EDIT: i32 = 105;
const ID_THICKNESS_SLIDER: i32 = 106;
const ID_THICKNESS_EDIT: i32 = 107;
const ID_COLOR_BUTTON: i32 = 108;
const ID_DOT_CHECKBOX: i32 = 109;
const ID_SHAPE_COMBO: i32 = 110;
const ID_ABOUT_BUTTON: i32 = 111;

// Trackbar messages (from commctrl.h)
const TBM_GETPOS: u32 = 0x0400;
const TBM_SETPOS: u32 = 0x0405;
const TBM_SETRANGE: u32 = 0x0406;

// ComboBox messages
const CB_ADDSTRING: u32 = 0x0143;
const CB_GETCURSEL: u32 = 0x0147;
const CB_SETCURSEL: u32 = 0x014E;
const CBN_SELCHANGE: u32 = 1;

// Button messages and notifications
const BM_GETCHECK: u32 = 0x00F0;
const BM_SETCHECK: u32 = 0x00F1;
const BST_CHECKED: usize = 1;
const BN_CLICKED: u32 = 0;
const BS_AUTOCHECKBOX: u32 = 0x0003;

// Edit notifications and styles
const EN_CHANGE: u32 = 0x0300;
const ES_NUMBER: u32 = 0x2000;

// ComboBox styles
const CBS_DROPDOWNLIST: u32 = 0x0003;

// Window dimensions
const WINDOW_WIDTH: i32 = 400;
const WINDOW_HEIGHT: i32 = 320;

// Layout constants
const MARGIN: i32 = 20;
const LABEL_WIDTH: i32 = 80;
const SLIDER_WIDTH: i32 = 150;
const EDIT_WIDTH: i32 = 50;

/// Child control handles, filled in on `WM_CREATE`.
#[derive(Default)]
struct Controls {
    preset_combo: HWND,
    shape_combo: HWND,
    size_slider: HWND,
    size_edit: HWND,
    thickness_slider: HWND,
    thickness_edit: HWND,
    dot_checkbox: HWND,
}

thread_local! {
    static CONTROLS: RefCell<Controls> = RefCell::new(Controls::default());
    // Set while code (not the user) writes edit text, so EN_CHANGE does
    // not feed the refresh back in as an edit.
    static REFRESHING: RefCell<bool> = const { RefCell::new(false) };
}

/// Create and show the settings panel.
pub fn create() -> windows::core::Result<HWND> {
    unsafe {
        let hinstance = GetModuleHandleW(None)?;
        let class_name = w!("CrosshairSettingsClass");

        let wc = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: Some(wndproc),
            hInstance: hinstance.into(),
            hCursor: LoadCursorW(None, IDC_ARROW)?,
            hbrBackground: HBRUSH(GetStockObject(WHITE_BRUSH).0),
            lpszClassName: class_name,
            ..Default::default()
        };
        RegisterClassW(&wc);

        let hwnd = CreateWindowExW(
            WS_EX_TOPMOST,
            class_name,
            w!("Crosshair Settings"),
            WS_OVERLAPPED | WS_CAPTION | WS_SYSMENU | WS_MINIMIZEBOX,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            WINDOW_WIDTH,
            WINDOW_HEIGHT,
            None,
            None,
            Some(hinstance.into()),
            None,
        )?;

        let _ = ShowWindow(hwnd, SW_SHOW);
        Ok(hwnd)
    }
}

unsafe extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    match msg {
        WM_CREATE => {
            create_controls(hwnd);
            refresh_controls();
            LRESULT(0)
        }

        WM_HSCROLL => {
            handle_slider_change(HWND(lparam.0 as *mut _));
            LRESULT(0)
        }

        WM_COMMAND => {
            let control_id = (wparam.0 & 0xFFFF) as i32;
            let notification = ((wparam.0 >> 16) & 0xFFFF) as u32;
            handle_command(hwnd, control_id, notification, lparam);
            LRESULT(0)
        }

        WM_ACTIVATE => {
            // Deliberately get out of the way instead of closing.
            if (wparam.0 & 0xFFFF) as u32 == WA_INACTIVE {
                let _ = ShowWindow(hwnd, SW_MINIMIZE);
            }
            LRESULT(0)
        }

        WM_CLOSE => {
            let _ = DestroyWindow(hwnd);
            LRESULT(0)
        }

        WM_DESTROY => {
            // The panel going away ends the application; the final save
            // happens after the message loop drains.
            PostQuitMessage(0);
            LRESULT(0)
        }

        _ => DefWindowProcW(hwnd, msg, wparam, lparam),
    }
}

unsafe fn create_controls(hwnd: HWND) {
    let hinstance: HINSTANCE = GetModuleHandleW(None).unwrap_or_default().into();

    create_label(hwnd, hinstance, MARGIN, 20, "Preset:");
    let preset_combo = create_combobox(hwnd, hinstance, 100, 20, ID_PRESET_COMBO);
    for i in 0..PRESET_COUNT {
        add_combo_item(preset_combo, &format!("Preset {}", i + 1));
    }
    create_button(hwnd, hinstance, 260, 20, 120, "Save Preset", ID_SAVE_BUTTON);
    create_button(hwnd, hinstance, 260, 50, 120, "Reset Preset", ID_RESET_BUTTON);

    create_label(hwnd, hinstance, MARGIN, 90, "Size:");
    let size_slider = create_slider(hwnd, hinstance, 100, 90, ID_SIZE_SLIDER);
    init_slider(size_slider, MIN_SIZE, MAX_SIZE);
    let size_edit = create_edit(hwnd, hinstance, 260, 90, ID_SIZE_EDIT);

    create_label(hwnd, hinstance, MARGIN, 130, "Thickness:");
    let thickness_slider = create_slider(hwnd, hinstance, 100, 130, ID_THICKNESS_SLIDER);
    init_slider(thickness_slider, MIN_THICKNESS, MAX_THICKNESS);
    let thickness_edit = create_edit(hwnd, hinstance, 260, 130, ID_THICKNESS_EDIT);

    create_button(hwnd, hinstance, MARGIN, 170, 120, "Change Color...", ID_COLOR_BUTTON);
    let dot_checkbox = create_checkbox(hwnd, hinstance, 150, 170, "Center dot", ID_DOT_CHECKBOX);

    create_label(hwnd, hinstance, MARGIN, 210, "Shape:");
    let shape_combo = create_combobox(hwnd, hinstance, 100, 210, ID_SHAPE_COMBO);
    for name in ["Cross", "Circle", "Dot"] {
        add_combo_item(shape_combo, name);
    }

    create_button(hwnd, hinstance, 350, 240, 25, "?", ID_ABOUT_BUTTON);

    CONTROLS.with(|c| {
        *c.borrow_mut() = Controls {
            preset_combo,
            shape_combo,
            size_slider,
            size_edit,
            thickness_slider,
            thickness_edit,
            dot_checkbox,
        };
    });
}

/// Push the active configuration into every control.
fn refresh_controls() {
    let (active, config) = state::with_settings(|s| (s.active_preset, *s.active()));

    CONTROLS.with(|c| {
        let c = c.borrow();
        unsafe {
            SendMessageW(
                c.preset_combo,
                CB_SETCURSEL,
                Some(WPARAM(active as usize)),
                None,
            );
            SendMessageW(
                c.shape_combo,
                CB_SETCURSEL,
                Some(WPARAM(config.shape.index())),
                None,
            );
            SendMessageW(
                c.size_slider,
                TBM_SETPOS,
                Some(WPARAM(1)),
                Some(LPARAM(config.size as isize)),
            );
            set_edit_text(c.size_edit, &config.size.to_string());
            SendMessageW(
                c.thickness_slider,
                TBM_SETPOS,
                Some(WPARAM(1)),
                Some(LPARAM(config.thickness as isize)),
            );
            set_edit_text(c.thickness_edit, &config.thickness.to_string());
            let check = if config.center_dot { BST_CHECKED } else { 0 };
            SendMessageW(c.dot_checkbox, BM_SETCHECK, Some(WPARAM(check)), None);
        }
    });
}

unsafe fn handle_slider_change(slider: HWND) {
    let pos = SendMessageW(slider, TBM_GETPOS, None, None).0 as i32;

    let (command, edit) = match GetDlgCtrlID(slider) {
        ID_SIZE_SLIDER => (SettingsCommand::SetSize(pos), controls(|c| c.size_edit)),
        ID_THICKNESS_SLIDER => (
            SettingsCommand::SetThickness(pos),
            controls(|c| c.thickness_edit),
        ),
        _ => return,
    };

    if state::apply(command) {
        set_edit_text(edit, &pos.to_string());
        overlay::window::invalidate();
    }
}

unsafe fn handle_command(hwnd: HWND, control_id: i32, notification: u32, lparam: LPARAM) {
    match control_id {
        ID_PRESET_COMBO if notification == CBN_SELCHANGE => {
            let selection = SendMessageW(HWND(lparam.0 as *mut _), CB_GETCURSEL, None, None).0;
            if selection >= 0 && state::apply(SettingsCommand::SelectPreset(selection as u32)) {
                refresh_controls();
                overlay::window::invalidate();
            }
        }

        ID_SHAPE_COMBO if notification == CBN_SELCHANGE => {
            let selection = SendMessageW(HWND(lparam.0 as *mut _), CB_GETCURSEL, None, None).0;
            if selection >= 0
                && state::apply(SettingsCommand::SetShape(Shape::from_index(
                    selection as usize,
                )))
            {
                overlay::window::invalidate();
            }
        }

        ID_SIZE_EDIT if notification == EN_CHANGE => {
            handle_edit_change(
                HWND(lparam.0 as *mut _),
                MIN_SIZE,
                MAX_SIZE,
                SettingsCommand::SetSize,
                controls(|c| c.size_slider),
            );
        }

        ID_THICKNESS_EDIT if notification == EN_CHANGE => {
            handle_edit_change(
                HWND(lparam.0 as *mut _),
                MIN_THICKNESS,
                MAX_THICKNESS,
                SettingsCommand::SetThickness,
                controls(|c| c.thickness_slider),
            );
        }

        ID_DOT_CHECKBOX if notification == BN_CLICKED => {
            let checked = SendMessageW(controls(|c| c.dot_checkbox), BM_GETCHECK, None, None).0
                as usize
                == BST_CHECKED;
            if state::apply(SettingsCommand::SetCenterDot(checked)) {
                overlay::window::invalidate();
            }
        }

        ID_COLOR_BUTTON if notification == BN_CLICKED => {
            show_color_dialog(hwnd);
        }

        ID_SAVE_BUTTON if notification == BN_CLICKED => {
            let settings = state::with_settings(Clone::clone);
            match storage::save(&settings) {
                Ok(()) => {
                    message_box(hwnd, "Saved", "Settings saved.", MB_OK | MB_ICONINFORMATION);
                }
                Err(e) => {
                    log::warn!("saving settings failed: {e}");
                    message_box(
                        hwnd,
                        "Save failed",
                        &format!("Could not save settings:\n{e}"),
                        MB_OK | MB_ICONWARNING,
                    );
                }
            }
        }

        ID_RESET_BUTTON if notification == BN_CLICKED => {
            let answer = message_box(
                hwnd,
                "Confirm",
                "Reset this preset to its default values?",
                MB_YESNO | MB_ICONWARNING,
            );
            if answer == IDYES && state::apply(SettingsCommand::ResetActive) {
                refresh_controls();
                overlay::window::invalidate();
            }
        }

        ID_ABOUT_BUTTON if notification == BN_CLICKED => {
            let message = format!(
                "Crosshair Overlay v{}\n\n\
                Draws a configurable aiming reticle on top of all windows.\n\
                Edits apply live; use Save Preset to keep them.",
                VERSION
            );
            message_box(hwnd, "About Crosshair Overlay", &message, MB_OK | MB_ICONINFORMATION);
        }

        _ => {}
    }
}

/// Numeric field edit: apply only integers inside `[lo, hi]` and mirror
/// the paired slider; anything else keeps the stored value.
unsafe fn handle_edit_change(
    edit: HWND,
    lo: i32,
    hi: i32,
    make_command: fn(i32) -> SettingsCommand,
    slider: HWND,
) {
    if REFRESHING.with(|r| *r.borrow()) {
        return;
    }
    let Some(value) = parse_field_value(&window_text(edit), lo, hi) else {
        return;
    };
    if state::apply(make_command(value)) {
        SendMessageW(
            slider,
            TBM_SETPOS,
            Some(WPARAM(1)),
            Some(LPARAM(value as isize)),
        );
        overlay::window::invalidate();
    }
}

/// Modal color picker seeded with the active color and swatch palette.
///
/// The dialog owns the sixteen custom swatches while it is open; they are
/// copied back whether or not the user accepts, so the palette accumulates
/// across sessions. The stroke color itself only changes on OK.
unsafe fn show_color_dialog(hwnd: HWND) {
    let config = state::with_settings(|s| *s.active());

    let mut custom = [COLORREF(0); CUSTOM_COLOR_COUNT];
    for (slot, rgb) in custom.iter_mut().zip(config.custom_colors.iter()) {
        *slot = COLORREF(rgb.to_colorref());
    }

    let mut cc = CHOOSECOLORW {
        lStructSize: std::mem::size_of::<CHOOSECOLORW>() as u32,
        hwndOwner: hwnd,
        rgbResult: COLORREF(config.color.to_colorref()),
        lpCustColors: custom.as_mut_ptr(),
        Flags: CC_FULLOPEN | CC_RGBINIT,
        ..Default::default()
    };

    let accepted = ChooseColorW(&mut cc).as_bool();

    let mut swatches = [Rgb::default(); CUSTOM_COLOR_COUNT];
    for (rgb, slot) in swatches.iter_mut().zip(custom.iter()) {
        *rgb = Rgb::from_colorref(slot.0);
    }
    state::apply(SettingsCommand::SetCustomColors(swatches));

    if accepted && state::apply(SettingsCommand::SetColor(Rgb::from_colorref(cc.rgbResult.0))) {
        overlay::window::invalidate();
    }
}

// === Control helpers ===

fn controls<R>(f: impl FnOnce(&Controls) -> R) -> R {
    CONTROLS.with(|c| f(&c.borrow()))
}

unsafe fn set_font(hwnd: HWND) {
    let font = GetStockObject(DEFAULT_GUI_FONT);
    SendMessageW(hwnd, WM_SETFONT, Some(WPARAM(font.0 as usize)), Some(LPARAM(1)));
}

/// Write edit text without the change notification looping back.
unsafe fn set_edit_text(hwnd: HWND, text: &str) {
    REFRESHING.with(|r| *r.borrow_mut() = true);
    let text_wide: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();
    let _ = SetWindowTextW(hwnd, PCWSTR(text_wide.as_ptr()));
    REFRESHING.with(|r| *r.borrow_mut() = false);
}

unsafe fn window_text(hwnd: HWND) -> String {
    let mut buffer = [0u16; 16];
    let len = GetWindowTextW(hwnd, &mut buffer) as usize;
    String::from_utf16_lossy(&buffer[..len.min(buffer.len())])
}

unsafe fn message_box(
    hwnd: HWND,
    title: &str,
    text: &str,
    style: MESSAGEBOX_STYLE,
) -> MESSAGEBOX_RESULT {
    let title_wide: Vec<u16> = title.encode_utf16().chain(std::iter::once(0)).collect();
    let text_wide: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();
    MessageBoxW(
        Some(hwnd),
        PCWSTR(text_wide.as_ptr()),
        PCWSTR(title_wide.as_ptr()),
        style,
    )
}

unsafe fn create_label(hwnd: HWND, hinstance: HINSTANCE, x: i32, y: i32, text: &str) {
    let text_wide: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();
    if let Ok(label) = CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        w!("STATIC"),
        PCWSTR(text_wide.as_ptr()),
        WS_CHILD | WS_VISIBLE,
        x,
        y + 4,
        LABEL_WIDTH,
        20,
        Some(hwnd),
        None,
        Some(hinstance),
        None,
    ) {
        set_font(label);
    }
}

unsafe fn create_button(
    hwnd: HWND,
    hinstance: HINSTANCE,
    x: i32,
    y: i32,
    width: i32,
    text: &str,
    id: i32,
) {
    let text_wide: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();
    if let Ok(button) = CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        w!("BUTTON"),
        PCWSTR(text_wide.as_ptr()),
        WS_CHILD | WS_VISIBLE | WS_TABSTOP,
        x,
        y,
        width,
        26,
        Some(hwnd),
        Some(HMENU(id as *mut _)),
        Some(hinstance),
        None,
    ) {
        set_font(button);
    }
}

unsafe fn create_checkbox(
    hwnd: HWND,
    hinstance: HINSTANCE,
    x: i32,
    y: i32,
    text: &str,
    id: i32,
) -> HWND {
    let text_wide: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();
    let checkbox = CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        w!("BUTTON"),
        PCWSTR(text_wide.as_ptr()),
        WS_CHILD | WS_VISIBLE | WS_TABSTOP | WINDOW_STYLE(BS_AUTOCHECKBOX),
        x,
        y,
        120,
        26,
        Some(hwnd),
        Some(HMENU(id as *mut _)),
        Some(hinstance),
        None,
    )
    .unwrap_or_default();
    set_font(checkbox);
    checkbox
}

unsafe fn create_slider(hwnd: HWND, hinstance: HINSTANCE, x: i32, y: i32, id: i32) -> HWND {
    CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        w!("msctls_trackbar32"),
        None,
        WS_CHILD | WS_VISIBLE | WS_TABSTOP,
        x,
        y,
        SLIDER_WIDTH,
        28,
        Some(hwnd),
        Some(HMENU(id as *mut _)),
        Some(hinstance),
        None,
    )
    .unwrap_or_default()
}

unsafe fn create_edit(hwnd: HWND, hinstance: HINSTANCE, x: i32, y: i32, id: i32) -> HWND {
    let edit = CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        w!("EDIT"),
        None,
        WS_CHILD | WS_VISIBLE | WS_TABSTOP | WS_BORDER | WINDOW_STYLE(ES_NUMBER),
        x,
        y + 2,
        EDIT_WIDTH,
        22,
        Some(hwnd),
        Some(HMENU(id as *mut _)),
        Some(hinstance),
        None,
    )
    .unwrap_or_default();
    set_font(edit);
    edit
}

unsafe fn create_combobox(hwnd: HWND, hinstance: HINSTANCE, x: i32, y: i32, id: i32) -> HWND {
    let combo = CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        w!("COMBOBOX"),
        None,
        WS_CHILD | WS_VISIBLE | WS_TABSTOP | WINDOW_STYLE(CBS_DROPDOWNLIST),
        x,
        y,
        150,
        120, // Height includes dropdown area
        Some(hwnd),
        Some(HMENU(id as *mut _)),
        Some(hinstance),
        None,
    )
    .unwrap_or_default();
    set_font(combo);
    combo
}

unsafe fn add_combo_item(combo: HWND, text: &str) {
    let text_wide: Vec<u16> = text.encode_utf16().chain(std::iter::once(0)).collect();
    SendMessageW(
        combo,
        CB_ADDSTRING,
        None,
        Some(LPARAM(text_wide.as_ptr() as isize)),
    );
}

unsafe fn init_slider(slider: HWND, min: i32, max: i32) {
    let range = ((max as isize) << 16) | (min as isize);
    SendMessageW(slider, TBM_SETRANGE, Some(WPARAM(1)), Some(LPARAM(range)));
}
