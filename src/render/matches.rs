use crate::filter::filter_entries;
use crate::model::{MatchEvent, TeamSide};
use crate::render::SafeHtml;

const EMPTY_MATCHES_HTML: &str = r#"<p class="muted">No matches found for this date.</p>"#;
const SCORE_PLACEHOLDER: &str = "-";

/// Render the filtered match list as a sequence of cards.
pub fn render_match_cards(matches: &[MatchEvent], query: &str) -> String {
    let visible = filter_entries(matches, query);
    if visible.is_empty() {
        return EMPTY_MATCHES_HTML.to_string();
    }
    visible.into_iter().map(render_card).collect()
}

fn render_card(event: &MatchEvent) -> String {
    let mut html = SafeHtml::new();
    html.raw(r#"<article class="match"><div class="row"><strong>"#)
        .text(&event.venue_name)
        .raw("</strong>");

    if event.status_state.is_live() {
        html.raw(r#"<span class="badge live">"#);
    } else {
        html.raw(r#"<span class="badge">"#);
    }
    html.text(&event.status_label).raw("</span></div>");

    render_side(&mut html, &event.home);
    render_side(&mut html, &event.away);
    html.raw("</article>");
    html.into_string()
}

fn render_side(html: &mut SafeHtml, side: &TeamSide) {
    html.raw(r#"<div class="row"><div class="team">"#);
    if let Some(logo) = &side.logo_url {
        html.raw(r#"<img src=""#)
            .text(logo)
            .raw(r#"" alt=""#)
            .text(&side.name)
            .raw(r#" logo" />"#);
    }
    html.raw("<span>")
        .text(&side.name)
        .raw(r#"</span></div><span class="score">"#)
        .text(side.score.as_deref().unwrap_or(SCORE_PLACEHOLDER))
        .raw("</span></div>");
}
