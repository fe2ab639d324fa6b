use crate::Result;
use crate::cards::card::Card;
use crate::simulation::scenario::Scenario;
use serde::Deserialize;

/// An analysis request as it arrives over the wire.
///
/// Cards are notation strings like `"Ah"`. Each profile stands for one
/// opponent; only the count matters, and an empty list means heads-up.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Request {
    pub hero: Vec<String>,
    pub board: Vec<String>,
    pub dead: Vec<String>,
    pub profiles: Vec<String>,
    pub iterations: Option<usize>,
}

impl Request {
    pub fn opponents(&self) -> usize {
        self.profiles.len().max(1)
    }
    fn cards(tokens: &[String]) -> Result<Vec<Card>> {
        tokens.iter().map(|s| Card::try_from(s.as_str())).collect()
    }
}

/// card parsing fails before any validation of the table
impl TryFrom<&Request> for Scenario {
    type Error = crate::Error;
    fn try_from(request: &Request) -> Result<Self> {
        let hero = Request::cards(&request.hero)?;
        let board = Request::cards(&request.board)?;
        let dead = Request::cards(&request.dead)?;
        Scenario::new(&hero, &board, &dead, request.opponents())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn parses_json() {
        let request = serde_json::from_str::<Request>(
            r#"{ "hero": ["Ah", "kd"], "board": ["Qh", "Jc", "2s"], "profiles": ["tight", "loose"] }"#,
        )
        .unwrap();
        let scenario = Scenario::try_from(&request).unwrap();
        assert_eq!(scenario.opponents(), 2);
        assert_eq!(scenario.board().size(), 3);
        assert_eq!(scenario.dead().size(), 0);
        assert_eq!(request.iterations, None);
    }

    #[test]
    fn no_profiles_means_heads_up() {
        let request = serde_json::from_str::<Request>(r#"{ "hero": ["Ah", "Kd"] }"#).unwrap();
        assert_eq!(request.opponents(), 1);
        assert_eq!(Scenario::try_from(&request).unwrap().opponents(), 1);
    }

    #[test]
    fn bad_card_fails_fast() {
        let request = Request {
            hero: vec!["Ah".into(), "Xx".into()],
            board: vec!["Ah".into()],
            ..Default::default()
        };
        assert!(matches!(Scenario::try_from(&request), Err(Error::InvalidCard(_))));
    }

    #[test]
    fn duplicates_rejected() {
        let request = Request {
            hero: vec!["Ah".into(), "Kd".into()],
            board: vec!["Qh".into(), "Jc".into(), "Ah".into()],
            ..Default::default()
        };
        assert!(matches!(Scenario::try_from(&request), Err(Error::DuplicateCard(_))));
    }
}
