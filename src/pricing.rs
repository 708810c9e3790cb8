//! Markup, commission and profit calculations
//!
//! All money math is plain f64 in the agency's working currency. Derived
//! figures shown to the agent (selling rate, commission, profit) are rounded
//! to whole units; intermediate totals are kept exact.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::LodgeDeskError;

/// Derived pricing for one stay
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingBreakdown {
    /// Per-night selling rate after markup, rounded
    pub selling_rate: f64,
    pub total_net: f64,
    pub total_selling: f64,
    /// Agency commission on the total selling price, rounded
    pub commission: f64,
    /// What remains after net cost and commission, rounded
    pub profit: f64,
}

/// Price a stay from its net rate and markup.
///
/// The selling rate is the net rate marked up by `markup_pct` percent;
/// totals scale by nights, guests and rooms; commission is taken as
/// `commission_pct` percent of the total selling price.
#[must_use]
pub fn price_stay(
    net_rate: f64,
    markup_pct: f64,
    commission_pct: f64,
    nights: u32,
    guests: u32,
    rooms: u32,
) -> PricingBreakdown {
    let occupancy = f64::from(nights) * f64::from(guests) * f64::from(rooms);
    let selling_rate = net_rate * (1.0 + markup_pct / 100.0);
    let total_net = net_rate * occupancy;
    let total_selling = selling_rate * occupancy;
    let commission = total_selling * (commission_pct / 100.0);
    let profit = total_selling - total_net - commission;

    PricingBreakdown {
        selling_rate: selling_rate.round(),
        total_net,
        total_selling,
        commission: commission.round(),
        profit: profit.round(),
    }
}

/// One line of the quote sheet: a property with its rate and occupancy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingTier {
    pub id: String,
    pub name: String,
    pub net_rate: f64,
    /// Markup percentage applied to the net rate
    pub markup: f64,
    pub selling_rate: f64,
    pub commission: f64,
    pub profit: f64,
    pub nights: u32,
    pub guests: u32,
    pub rooms: u32,
}

impl PricingTier {
    fn recalculate(&mut self, commission_pct: f64) {
        let breakdown = price_stay(
            self.net_rate,
            self.markup,
            commission_pct,
            self.nights,
            self.guests,
            self.rooms,
        );
        self.selling_rate = breakdown.selling_rate;
        self.commission = breakdown.commission;
        self.profit = breakdown.profit;
    }
}

/// Sheet-wide totals for the summary cards
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteTotals {
    pub total_net: f64,
    pub total_selling: f64,
    pub total_commission: f64,
    pub total_profit: f64,
    /// Mean markup percentage across tiers, 0 for an empty sheet
    pub avg_markup: f64,
    /// Profit as a percentage of total selling, 0 when nothing is sold
    pub profit_margin: f64,
}

/// The commission calculator's working state: pricing tiers plus the
/// settings that drive recalculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSheet {
    tiers: Vec<PricingTier>,
    /// Commission percentage applied to every tier
    commission_rate: f64,
    /// Markup percentage new tiers start with
    default_markup: f64,
    /// When false, edits leave derived figures untouched until an explicit
    /// recalculation
    auto_calculate: bool,
    next_id: u64,
}

impl QuoteSheet {
    #[must_use]
    pub fn new(default_markup: f64, commission_rate: f64) -> Self {
        Self {
            tiers: Vec::new(),
            commission_rate,
            default_markup,
            auto_calculate: true,
            next_id: 1,
        }
    }

    /// Seed a sheet from existing tiers, recalculating their derived figures.
    #[must_use]
    pub fn with_tiers(default_markup: f64, commission_rate: f64, tiers: Vec<PricingTier>) -> Self {
        let mut sheet = Self::new(default_markup, commission_rate);
        sheet.next_id = tiers.len() as u64 + 1;
        sheet.tiers = tiers;
        sheet.recalculate_all();
        sheet
    }

    pub fn tiers(&self) -> &[PricingTier] {
        &self.tiers
    }

    #[must_use]
    pub fn commission_rate(&self) -> f64 {
        self.commission_rate
    }

    #[must_use]
    pub fn auto_calculate(&self) -> bool {
        self.auto_calculate
    }

    pub fn set_auto_calculate(&mut self, enabled: bool) {
        self.auto_calculate = enabled;
    }

    /// Change the commission percentage and reprice every tier.
    pub fn set_commission_rate(&mut self, commission_rate: f64) {
        self.commission_rate = commission_rate;
        self.recalculate_all();
    }

    pub fn set_default_markup(&mut self, default_markup: f64) {
        self.default_markup = default_markup;
    }

    /// Append a fresh tier with the default markup and return its id.
    pub fn add_tier(&mut self, name: impl Into<String>) -> String {
        let id = self.next_id.to_string();
        self.next_id += 1;
        let mut tier = PricingTier {
            id: id.clone(),
            name: name.into(),
            net_rate: 400.0,
            markup: self.default_markup,
            selling_rate: 0.0,
            commission: 0.0,
            profit: 0.0,
            nights: 1,
            guests: 2,
            rooms: 1,
        };
        tier.recalculate(self.commission_rate);
        debug!(id = %tier.id, name = %tier.name, "Adding pricing tier");
        self.tiers.push(tier);
        id
    }

    /// Remove a tier by id. Removing an unknown id is a no-op.
    pub fn remove_tier(&mut self, id: &str) {
        self.tiers.retain(|tier| tier.id != id);
    }

    pub fn set_net_rate(&mut self, id: &str, net_rate: f64) -> Result<(), LodgeDeskError> {
        self.edit_tier(id, |tier| tier.net_rate = net_rate)
    }

    pub fn set_markup(&mut self, id: &str, markup: f64) -> Result<(), LodgeDeskError> {
        self.edit_tier(id, |tier| tier.markup = markup)
    }

    pub fn set_occupancy(
        &mut self,
        id: &str,
        nights: u32,
        guests: u32,
        rooms: u32,
    ) -> Result<(), LodgeDeskError> {
        self.edit_tier(id, |tier| {
            tier.nights = nights;
            tier.guests = guests;
            tier.rooms = rooms;
        })
    }

    pub fn rename_tier(&mut self, id: &str, name: impl Into<String>) -> Result<(), LodgeDeskError> {
        let name = name.into();
        self.edit_tier(id, |tier| tier.name = name)
    }

    /// Reprice every tier against the current commission rate.
    pub fn recalculate_all(&mut self) {
        for tier in &mut self.tiers {
            tier.recalculate(self.commission_rate);
        }
    }

    /// Sheet-wide totals. Per-tier figures are derived from the stored
    /// (rounded) selling rates, so stale tiers contribute their stale
    /// numbers when auto-calculation is off.
    #[must_use]
    pub fn totals(&self) -> QuoteTotals {
        let mut totals = QuoteTotals {
            total_net: 0.0,
            total_selling: 0.0,
            total_commission: 0.0,
            total_profit: 0.0,
            avg_markup: 0.0,
            profit_margin: 0.0,
        };

        for tier in &self.tiers {
            let occupancy = f64::from(tier.nights) * f64::from(tier.guests) * f64::from(tier.rooms);
            let tier_selling = tier.selling_rate * occupancy;
            let tier_net = tier.net_rate * occupancy;
            let tier_commission = tier_selling * (self.commission_rate / 100.0);

            totals.total_net += tier_net;
            totals.total_selling += tier_selling;
            totals.total_commission += tier_commission;
            totals.total_profit += tier_selling - tier_net - tier_commission;
            totals.avg_markup += tier.markup;
        }

        if !self.tiers.is_empty() {
            totals.avg_markup /= self.tiers.len() as f64;
        }
        if totals.total_selling > 0.0 {
            totals.profit_margin = totals.total_profit / totals.total_selling * 100.0;
        }
        totals
    }

    fn edit_tier(
        &mut self,
        id: &str,
        apply: impl FnOnce(&mut PricingTier),
    ) -> Result<(), LodgeDeskError> {
        let tier = self
            .tiers
            .iter_mut()
            .find(|tier| tier.id == id)
            .ok_or_else(|| {
                LodgeDeskError::validation(format!("no pricing tier with id {id} on the sheet"))
            })?;
        apply(tier);
        if self.auto_calculate {
            tier.recalculate(self.commission_rate);
        }
        Ok(())
    }
}
