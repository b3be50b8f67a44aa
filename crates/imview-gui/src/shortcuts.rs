use imview_core::config::{Accelerator, ModifierKey, ShortcutConfig};
use tracing::warn;

/// Configured accelerators resolved to egui shortcuts.
pub struct Shortcuts {
    pub open: egui::KeyboardShortcut,
    pub quit: egui::KeyboardShortcut,
    pub fit: egui::KeyboardShortcut,
    pub toggle_grid: egui::KeyboardShortcut,
    pub zoom_modifier: ModifierKey,
}

impl Shortcuts {
    pub fn from_config(config: &ShortcutConfig) -> Self {
        let defaults = ShortcutConfig::default();
        Self {
            open: resolve(&config.open, &defaults.open),
            quit: resolve(&config.quit, &defaults.quit),
            fit: resolve(&config.fit, &defaults.fit),
            toggle_grid: resolve(&config.toggle_grid, &defaults.toggle_grid),
            zoom_modifier: config.zoom_modifier,
        }
    }
}

fn resolve(acc: &Accelerator, fallback: &Accelerator) -> egui::KeyboardShortcut {
    to_egui(acc).unwrap_or_else(|| {
        warn!("unknown key in shortcut {acc}, using {fallback}");
        to_egui(fallback).unwrap_or(egui::KeyboardShortcut::new(
            egui::Modifiers::COMMAND,
            egui::Key::Escape,
        ))
    })
}

pub fn to_egui(acc: &Accelerator) -> Option<egui::KeyboardShortcut> {
    let key = egui::Key::from_name(&acc.key)?;
    let mut modifiers = egui::Modifiers::NONE;
    if acc.ctrl {
        modifiers = modifiers | egui::Modifiers::COMMAND;
    }
    if acc.shift {
        modifiers = modifiers | egui::Modifiers::SHIFT;
    }
    if acc.alt {
        modifiers = modifiers | egui::Modifiers::ALT;
    }
    Some(egui::KeyboardShortcut::new(modifiers, key))
}

/// Whether the configured zoom modifier is held.
pub fn modifier_held(key: ModifierKey, modifiers: egui::Modifiers) -> bool {
    match key {
        ModifierKey::Ctrl => modifiers.command || modifiers.ctrl,
        ModifierKey::Shift => modifiers.shift,
        ModifierKey::Alt => modifiers.alt,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_shortcuts_resolve() {
        let s = Shortcuts::from_config(&ShortcutConfig::default());
        assert_eq!(s.open.logical_key, egui::Key::O);
        assert_eq!(s.quit.logical_key, egui::Key::Q);
        assert_eq!(s.fit.logical_key, egui::Key::F);
        assert_eq!(s.toggle_grid.logical_key, egui::Key::G);
        assert_eq!(s.open.modifiers, egui::Modifiers::COMMAND);
    }

    #[test]
    fn test_unknown_key_falls_back() {
        let config = ShortcutConfig {
            fit: Accelerator::ctrl("NotAKey"),
            ..ShortcutConfig::default()
        };
        let s = Shortcuts::from_config(&config);
        assert_eq!(s.fit.logical_key, egui::Key::F);
    }

    #[test]
    fn test_modifier_held() {
        let ctrl = egui::Modifiers::COMMAND;
        assert!(modifier_held(ModifierKey::Ctrl, ctrl));
        assert!(!modifier_held(ModifierKey::Shift, ctrl));
        assert!(modifier_held(ModifierKey::Alt, egui::Modifiers::ALT));
    }
}
