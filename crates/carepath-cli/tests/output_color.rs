//! Forced-colour rendering. Kept in its own test binary because the colour
//! override is process-wide.

use carepath_cli::output::render_result;
use carepath_core::presets::get_preset;

fn render(preset_id: &str) -> String {
    colored::control::set_override(true);
    let intake = get_preset(preset_id).unwrap().record();
    render_result(&carepath_rules::evaluate(&intake))
}

#[test]
fn header_colour_follows_display_tier() {
    let ed = render("chest_pain_red_flag");
    let header = ed.lines().next().unwrap();
    assert!(header.starts_with("\x1b["));
    assert!(header.contains("31"));
    assert!(header.contains("[!!] Recommended care setting: ED (Immediate)"));

    let pcp = render("mild_cough");
    let header = pcp.lines().next().unwrap();
    assert!(header.contains("34"));
    assert!(header.contains("[i ] Recommended care setting: PCP (24–72 hrs)"));
}

#[test]
fn only_the_header_is_coloured() {
    let text = render("injury_cant_bear_weight");
    for line in text.lines().skip(1) {
        assert!(!line.contains('\x1b'), "{line}");
    }
}
