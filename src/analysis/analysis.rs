use super::draws::Draws;
use super::outs::Outs;
use super::report::Report;
use super::request::Request;
use super::texture::Texture;
use crate::Config;
use crate::Result;
use crate::evaluation::strength::Strength;
use crate::simulation::scenario::Scenario;

/// Runs every analyzer over a scenario and gathers the results.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    config: Config,
}

impl Analysis {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn run(&self, scenario: &Scenario) -> Report {
        self.run_with(scenario, self.config.iterations)
    }

    /// Parses and validates a request, then analyzes it. The request may
    /// override the simulation budget.
    pub fn serve(&self, request: &Request) -> Result<Report> {
        let scenario = Scenario::try_from(request)?;
        let iterations = request.iterations.unwrap_or(self.config.iterations);
        Ok(self.run_with(&scenario, iterations))
    }

    fn run_with(&self, scenario: &Scenario, iterations: usize) -> Report {
        log::info!("analyzing {}", scenario);
        let start = std::time::Instant::now();
        let outs = Outs::from(scenario);
        let texture = Texture::read(scenario.board());
        let heatmap = scenario.heatmap(self.config.heatmap_budget(scenario.opponents()));
        let tally = scenario.simulate(iterations);
        let draws = Draws::group(&heatmap, tally.win(), scenario.unknown(), &self.config);
        let current = match scenario.pocket().size() {
            5.. => Some(Strength::from(scenario.pocket())),
            _ => None,
        };
        log::debug!(
            "{} outs, {} alerts, {} draws",
            outs.len(),
            texture.len(),
            draws.len()
        );
        log::info!("analyzed in {:?}", start.elapsed());
        Report {
            street: scenario.board().street(),
            current,
            win: tally.win(),
            tie: tally.tie(),
            loss: tally.loss(),
            outs,
            texture,
            heatmap,
            draw_probability: draws.probability(),
            draws: draws.into(),
            distribution: tally.distribution(),
            winning: tally.winning(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::cards::card::Card;
    use crate::cards::street::Street;
    use crate::evaluation::ranking::Ranking;

    fn quick() -> Analysis {
        Analysis::new(Config {
            iterations: 2_000,
            heatmap_iterations: 40,
            heatmap_iterations_crowded: 20,
            ..Config::default()
        })
    }

    fn scenario(hero: &str, board: &str, opponents: usize) -> Scenario {
        let hero = Card::parse(hero).unwrap();
        let board = Card::parse(board).unwrap();
        Scenario::new(&hero, &board, &[], opponents).unwrap()
    }

    #[test]
    fn flop_report_is_complete() {
        let report = quick().run(&scenario("Ah Kh", "Qh 7h 2c", 1));
        assert_eq!(report.street, Some(Street::Flop));
        assert_eq!(report.current.map(|s| s.ranking()), Some(Ranking::HighCard));
        assert_eq!(report.heatmap.len(), 47);
        assert!(!report.outs.is_empty());
        assert!(report.texture.contains(&Texture::FlushDraw));
        assert!((report.win + report.tie + report.loss - 100.0).abs() < 0.1);
        assert!((0.0..=100.0).contains(&report.draw_probability));
        let total = report.distribution.values().sum::<f32>();
        assert!((total - 100.0).abs() < 0.1);
    }

    #[test]
    fn preflop_skips_board_analysis() {
        let report = quick().run(&scenario("As Ad", "", 2));
        assert_eq!(report.street, Some(Street::Pref));
        assert_eq!(report.current, None);
        assert!(report.outs.is_empty());
        assert!(report.texture.is_empty());
        assert!(report.heatmap.is_empty());
        assert!(report.draws.is_empty());
        assert_eq!(report.draw_probability, 0.0);
        assert!(report.win > 40.0);
    }

    #[test]
    fn river_has_no_future() {
        let report = quick().run(&scenario("As Ad", "Kc Qd 7h 5s 2c", 1));
        assert_eq!(report.street, Some(Street::Rive));
        assert!(report.heatmap.is_empty());
        assert!(report.outs.is_empty());
        assert_eq!(report.current.map(|s| s.ranking()), Some(Ranking::OnePair));
    }

    #[test]
    fn serve_parses_and_overrides_iterations() {
        let request = serde_json::from_str::<Request>(
            r#"{ "hero": ["As", "Ks"], "board": ["Qs", "Js", "Ts"], "iterations": 300 }"#,
        )
        .unwrap();
        let report = quick().serve(&request).unwrap();
        assert_eq!(report.win, 100.0);
        assert_eq!(report.distribution[&Ranking::StraightFlush], 100.0);
    }

    #[test]
    fn serve_rejects_bad_input() {
        let request = serde_json::from_str::<Request>(r#"{ "hero": ["As", "1s"] }"#).unwrap();
        assert!(matches!(quick().serve(&request), Err(Error::InvalidCard(_))));
        let request = serde_json::from_str::<Request>(r#"{ "hero": ["As"] }"#).unwrap();
        assert!(matches!(quick().serve(&request), Err(Error::HoleSize(1))));
    }

    #[test]
    fn report_serializes() {
        let report = quick().run(&scenario("Ah Kh", "Qh 7h 2c", 1));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["street"], "flop");
        assert!(json["heatmap"]["Th"].is_number());
        assert!(json["outs"]["cards"].is_array());
        assert!(json["distribution"].is_object());
        assert!(report.to_string().contains("win"));
    }
}
