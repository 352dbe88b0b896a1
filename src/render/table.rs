use crate::filter::filter_entries;
use crate::model::StandingsRow;
use crate::render::SafeHtml;

/// Ranks 1..=4 qualify for the Champions League places.
const QUALIFICATION_MAX_RANK: i64 = 4;
/// Ranks 18..=20 sit in the relegation zone. Fixed threshold, not derived
/// from table size.
const RELEGATION_MIN_RANK: i64 = 18;

const EMPTY_TABLE_HTML: &str = r#"<tr><td colspan="10">No table rows found.</td></tr>"#;

/// Render the filtered standings as table body rows, in stored order.
pub fn render_table_rows(rows: &[StandingsRow], query: &str) -> String {
    let visible = filter_entries(rows, query);
    if visible.is_empty() {
        return EMPTY_TABLE_HTML.to_string();
    }
    visible.into_iter().map(render_row).collect()
}

fn zone_class(rank: i64) -> &'static str {
    if rank <= QUALIFICATION_MAX_RANK {
        "top4"
    } else if rank >= RELEGATION_MIN_RANK {
        "bottom3"
    } else {
        ""
    }
}

fn render_row(row: &StandingsRow) -> String {
    let mut html = SafeHtml::new();
    html.raw(r#"<tr class=""#)
        .raw(zone_class(row.rank))
        .raw(r#""><td>"#)
        .raw(&row.rank.to_string())
        .raw(r#"</td><td><div class="team">"#);

    if let Some(logo) = &row.logo_url {
        html.raw(r#"<img src=""#)
            .text(logo)
            .raw(r#"" alt=""#)
            .text(&row.team)
            .raw(r#" logo" />"#);
    }
    html.raw("<span>").text(&row.team).raw("</span></div></td>");

    for cell in [
        row.played,
        row.won,
        row.drawn,
        row.lost,
        row.goals_for,
        row.goals_against,
        row.goal_difference,
    ] {
        html.raw("<td>").raw(&cell.to_string()).raw("</td>");
    }
    html.raw("<td><strong>")
        .raw(&row.points.to_string())
        .raw("</strong></td></tr>");
    html.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(rank: i64, team: &str) -> StandingsRow {
        StandingsRow {
            rank,
            team: team.to_string(),
            logo_url: None,
            played: 5,
            won: 3,
            drawn: 1,
            lost: 1,
            goals_for: 9,
            goals_against: 4,
            goal_difference: 5,
            points: 10,
        }
    }

    #[test]
    fn zone_classes_follow_fixed_thresholds() {
        assert_eq!(zone_class(1), "top4");
        assert_eq!(zone_class(4), "top4");
        assert_eq!(zone_class(5), "");
        assert_eq!(zone_class(17), "");
        assert_eq!(zone_class(18), "bottom3");
        assert_eq!(zone_class(20), "bottom3");
    }

    #[test]
    fn renders_rows_in_stored_order() {
        let rows = vec![row(1, "Arsenal"), row(2, "Liverpool"), row(20, "Luton")];
        let html = render_table_rows(&rows, "");
        assert_eq!(html.matches("<tr").count(), 3);
        let arsenal = html.find("Arsenal").unwrap();
        let liverpool = html.find("Liverpool").unwrap();
        let luton = html.find("Luton").unwrap();
        assert!(arsenal < liverpool && liverpool < luton);
        assert!(html.contains(r#"<tr class="top4">"#));
        assert!(html.contains(r#"<tr class="bottom3">"#));
        assert!(html.contains("<td><strong>10</strong></td>"));
    }

    #[test]
    fn empty_result_renders_placeholder_row() {
        assert_eq!(render_table_rows(&[], ""), EMPTY_TABLE_HTML);
        let rows = vec![row(1, "Arsenal")];
        assert_eq!(render_table_rows(&rows, "chelsea"), EMPTY_TABLE_HTML);
    }

    #[test]
    fn team_names_are_escaped() {
        let rows = vec![row(1, "A&B <United>")];
        let html = render_table_rows(&rows, "");
        assert!(html.contains("A&amp;B &lt;United&gt;"));
    }
}
