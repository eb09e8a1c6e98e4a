//! Five-element balance over the eight characters of a chart.

use saju_base::{ALL_ELEMENTS, FiveElement, FourPillars};
use serde::Serialize;

/// How many of the eight characters (four stems, four branches) carry
/// each element. Branch elements come from the primary hidden stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ElementBalance {
    pub wood: u8,
    pub fire: u8,
    pub earth: u8,
    pub metal: u8,
    pub water: u8,
}

impl ElementBalance {
    pub fn from_pillars(pillars: &FourPillars) -> Self {
        let mut balance = Self::default();
        for (_, p) in pillars.entries() {
            balance.add(p.stem.element());
            balance.add(p.branch.primary_hidden_stem().element());
        }
        balance
    }

    fn slot(&mut self, element: FiveElement) -> &mut u8 {
        match element {
            FiveElement::Wood => &mut self.wood,
            FiveElement::Fire => &mut self.fire,
            FiveElement::Earth => &mut self.earth,
            FiveElement::Metal => &mut self.metal,
            FiveElement::Water => &mut self.water,
        }
    }

    fn add(&mut self, element: FiveElement) {
        *self.slot(element) += 1;
    }

    pub const fn count(&self, element: FiveElement) -> u8 {
        match element {
            FiveElement::Wood => self.wood,
            FiveElement::Fire => self.fire,
            FiveElement::Earth => self.earth,
            FiveElement::Metal => self.metal,
            FiveElement::Water => self.water,
        }
    }

    pub const fn total(&self) -> u8 {
        self.wood + self.fire + self.earth + self.metal + self.water
    }

    /// Elements with the highest count, in generative order.
    pub fn dominant(&self) -> Vec<FiveElement> {
        let max = ALL_ELEMENTS.iter().map(|&e| self.count(e)).max().unwrap_or(0);
        ALL_ELEMENTS
            .into_iter()
            .filter(|&e| self.count(e) == max)
            .collect()
    }

    /// Elements absent from the chart.
    pub fn missing(&self) -> Vec<FiveElement> {
        ALL_ELEMENTS
            .into_iter()
            .filter(|&e| self.count(e) == 0)
            .collect()
    }
}
