// src/search.rs
//
// Fetch once, filter, shape for the report. The specs layer knows the
// wire; this layer decides what is kept and how a match reads.

use std::error::Error;

use crate::config::options::{NameFilter, QueryOptions};
use crate::core::text::{capitalize_first, contains_ci};
use crate::specs::players::{self, Player};

/// Matches in source order, plus the column headers used for export.
pub struct MatchSet {
    pub headers: Vec<String>,
    pub players: Vec<Player>,
}

/// True if `name` contains any of `terms`, case-insensitively.
pub fn matches_terms(name: &str, terms: &[String]) -> bool {
    terms.iter().any(|t| contains_ci(name, t))
}

/// Apply the name filter. Keeps source order; every survivor is an
/// element of the input.
pub fn filter_players(players: Vec<Player>, filter: &NameFilter) -> Vec<Player> {
    match filter {
        NameFilter::All => players,
        NameFilter::Terms(terms) => players
            .into_iter()
            .filter(|p| matches_terms(&p.name, terms))
            .collect(),
    }
}

/// Fetch the full player list and reduce it to the requested matches.
pub fn collect_matches(opts: &QueryOptions) -> Result<MatchSet, Box<dyn Error>> {
    logf!("GET {}", opts.endpoint.display());

    let all = match players::fetch(&opts.endpoint) {
        Ok(all) => all,
        Err(e) => {
            loge!("players fetch failed: {e}");
            return Err(e);
        }
    };
    logd!("{} players fetched", all.len());

    let players = filter_players(all, &opts.filter);
    logd!("{} matched", players.len());

    Ok(MatchSet {
        headers: vec![s!("ID"), s!("Name")],
        players,
    })
}

/// Header line above the matches. Default terms reproduce the classic
/// "Vernon/Carey players found:".
pub fn header_line(filter: &NameFilter) -> String {
    match filter {
        NameFilter::All => s!("All players:"),
        NameFilter::Terms(terms) => {
            let joined = terms
                .iter()
                .map(|t| capitalize_first(t))
                .collect::<Vec<_>>()
                .join("/");
            format!("{joined} players found:")
        }
    }
}

/// Console line for one match.
pub fn match_line(p: &Player) -> String {
    format!("ID {}: {}", p.id, p.name)
}

/// Row shape for CSV/TSV export; columns follow `MatchSet::headers`.
pub fn export_row(p: &Player) -> Vec<String> {
    vec![p.id.to_string(), p.name.clone()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::specs::players::decode;

    fn terms(list: &[&str]) -> NameFilter {
        NameFilter::Terms(list.iter().map(|t| s!(*t)).collect())
    }

    #[test]
    fn keeps_exactly_the_matching_records_in_order() {
        let players = decode(
            r#"[{"id":1,"name":"Vernon Carey"},{"id":2,"name":"John Smith"},{"id":3,"name":"CAREY Jr"}]"#,
        )
        .expect("decode");

        let matched = filter_players(players, &NameFilter::default());
        let lines: Vec<String> = matched.iter().map(match_line).collect();
        assert_eq!(lines, ["ID 1: Vernon Carey", "ID 3: CAREY Jr"]);
    }

    #[test]
    fn matching_is_case_insensitive_and_substring_based() {
        let t = match NameFilter::default() {
            NameFilter::Terms(t) => t,
            NameFilter::All => unreachable!(),
        };
        assert!(matches_terms("VERNON", &t));
        assert!(matches_terms("vernon carey jr.", &t));
        // "vern" does not contain "vernon"
        assert!(!matches_terms("vern", &t));
        assert!(!matches_terms("John Smith", &t));
    }

    #[test]
    fn result_is_a_subsequence_of_the_source() {
        let players = decode(
            r#"[{"id":5,"name":"Carey A"},{"id":6,"name":"x"},{"id":7,"name":"Vernon B"},{"id":8,"name":"y"},{"id":9,"name":"mccarey"}]"#,
        )
        .expect("decode");
        let source = players.clone();

        let matched = filter_players(players, &NameFilter::default());

        // Order preserved and every match is present in the source.
        let mut cursor = 0;
        for m in &matched {
            let pos = source[cursor..]
                .iter()
                .position(|p| p == m)
                .expect("match must come from the source, in order");
            cursor += pos + 1;
        }
        assert_eq!(matched.len(), 3);
    }

    #[test]
    fn all_filter_keeps_everything() {
        let players = decode(r#"[{"id":1,"name":"a"},{"id":2,"name":"b"}]"#).expect("decode");
        assert_eq!(filter_players(players, &NameFilter::All).len(), 2);
    }

    #[test]
    fn header_line_for_default_terms_matches_classic_output() {
        assert_eq!(header_line(&NameFilter::default()), "Vernon/Carey players found:");
    }

    #[test]
    fn header_line_for_custom_terms_and_all() {
        assert_eq!(header_line(&terms(&["lebron", "davis"])), "Lebron/Davis players found:");
        assert_eq!(header_line(&terms(&["fox"])), "Fox players found:");
        assert_eq!(header_line(&NameFilter::All), "All players:");
    }

    #[test]
    fn export_rows_follow_headers() {
        let players = decode(r#"[{"id":"uuid-3","name":"Carey Jr"}]"#).expect("decode");
        assert_eq!(export_row(&players[0]), vec![s!("uuid-3"), s!("Carey Jr")]);
    }
}
