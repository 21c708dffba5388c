//! Unit tests for the palette and category labels

use msio::theme::{color_to_ansi, paint, ANSI_RESET};
use msio::{ColorSetting, OutputType};
use ratatui::style::Color;

#[test]
fn resolve_without_override_returns_palette_entry() {
    let setting = ColorSetting::default();
    assert_eq!(setting.resolve(OutputType::Default, None), Color::White);
    assert_eq!(setting.resolve(OutputType::Prompt, None), Color::Magenta);
    assert_eq!(setting.resolve(OutputType::Error, None), Color::Red);
    assert_eq!(setting.resolve(OutputType::AllOk, None), Color::Green);
    assert_eq!(setting.resolve(OutputType::ListTitle, None), Color::Yellow);
    assert_eq!(setting.resolve(OutputType::CustomInfo, None), Color::Cyan);
    assert_eq!(setting.resolve(OutputType::MobileSuitInfo, None), Color::Blue);
}

#[test]
fn resolve_with_override_always_returns_override() {
    let setting = ColorSetting::default();
    for ty in OutputType::ALL {
        assert_eq!(setting.resolve(ty, Some(Color::DarkGray)), Color::DarkGray);
    }
}

#[test]
fn labels_cover_every_category() {
    let labels: Vec<&str> = OutputType::ALL.iter().map(|ty| ty.label()).collect();
    assert_eq!(
        labels,
        vec!["", "[Prompt]", "[Error]", "[AllOk]", "[List]", "[Info]", "[Info]"]
    );
}

#[test]
fn default_output_type_is_default() {
    assert_eq!(OutputType::default(), OutputType::Default);
}

#[test]
fn paint_uses_ansi_mapping() {
    assert_eq!(
        paint(Color::Cyan, "x"),
        format!("{}x{}", color_to_ansi(Color::Cyan), ANSI_RESET)
    );
}
