use super::draws::Draw;
use super::outs::Outs;
use super::texture::Texture;
use crate::Percent;
use crate::cards::street::Street;
use crate::evaluation::ranking::Ranking;
use crate::evaluation::strength::Strength;
use crate::simulation::heatmap::Heatmap;
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything a full analysis has to say about one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub street: Option<Street>,
    pub current: Option<Strength>,
    pub win: Percent,
    pub tie: Percent,
    pub loss: Percent,
    pub outs: Outs,
    pub texture: Vec<Texture>,
    pub heatmap: Heatmap,
    pub draws: Vec<Draw>,
    pub draw_probability: Percent,
    pub distribution: BTreeMap<Ranking, Percent>,
    pub winning: BTreeMap<Ranking, Percent>,
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.street {
            Some(street) => writeln!(f, "street   {}", street)?,
            None => writeln!(f, "street   -")?,
        }
        if let Some(current) = self.current {
            writeln!(f, "holding  {}", current)?;
        }
        writeln!(
            f,
            "win {:>6.2}%  tie {:>6.2}%  loss {:>6.2}%",
            self.win, self.tie, self.loss
        )?;
        if !self.outs.is_empty() {
            write!(f, "outs     {:>2} ({:.1}%) ", self.outs.len(), self.outs.probability())?;
            for card in self.outs.cards() {
                write!(f, "{} ", card)?;
            }
            writeln!(f)?;
        }
        for texture in self.texture.iter() {
            writeln!(f, "board    {}", texture)?;
        }
        for draw in self.draws.iter() {
            writeln!(f, "draw     {}", draw)?;
        }
        if !self.draws.is_empty() {
            writeln!(f, "drawing  {:.1}%", self.draw_probability)?;
        }
        for (ranking, percent) in self.distribution.iter().rev() {
            writeln!(f, "{:<14} {:>6.2}%", ranking.to_string(), percent)?;
        }
        Ok(())
    }
}
