//! [`Catalog`] of unit and package prices.

use common::{Money, Percent};
use rust_decimal::Decimal;

use crate::domain::PowerTier;

/// Versioned price list of every billable option.
///
/// The catalog is the single source of truth consulted by both the totals
/// calculator and the field resolver, so the two can never disagree on a
/// price. Unknown keys price at zero rather than erroring, so that catalog
/// drift degrades a quote instead of aborting it.
#[derive(Clone, Copy, Debug)]
pub struct Catalog {
    /// Exhibition season this price list applies to.
    season: &'static str,
}

impl Catalog {
    /// Returns the [`Catalog`] of the current exhibition season.
    #[must_use]
    pub fn current() -> Self {
        Self { season: "2026" }
    }

    /// Returns the exhibition season of this [`Catalog`].
    #[must_use]
    pub fn season(&self) -> &'static str {
        self.season
    }

    /// Returns the unit price of the provided option key, or zero for an
    /// unknown key.
    #[must_use]
    pub fn unit_price(&self, key: &str) -> Money {
        let amount = match key {
            // Space.
            "equipped_booth_m2" => Decimal::from(270),
            "bare_booth_m2" => Decimal::from(225),
            "open_corner" => Decimal::from(185),
            "power_2kw" => Decimal::from(220),
            "power_4kw" => Decimal::from(260),
            "power_6kw" => Decimal::from(350),
            "exterior_m2" => Decimal::from(50),
            "garden_cottage" => Decimal::from(800),
            "micro_stand" => Decimal::from(1200),
            "co_exhibitor" => Decimal::from(400),

            // Furnishing.
            "melamine_storeroom" => Decimal::from(200),
            "carpet_color_change" => Decimal::new(650, 2),
            "ceiling_canopy" => Decimal::from(15),
            "clad_partition" => Decimal::from(50),
            "wood_storeroom" => Decimal::from(260),
            "signage_strip" => Decimal::from(35),
            "spot_rail" => Decimal::from(45),
            "counter" => Decimal::from(165),
            "stool" => Decimal::from(40),
            "standing_table" => Decimal::from(90),
            "chair" => Decimal::from(40),
            "table_120x60" => Decimal::from(80),
            "standing_table_pack" => Decimal::from(195),
            "screen_52" => Decimal::from(395),
            "fridge_140" => Decimal::from(125),
            "fridge_260" => Decimal::from(210),
            "display_rack" => Decimal::from(115),
            "socket_block" => Decimal::from(18),
            "armchair" => Decimal::from(59),
            "coffee_table" => Decimal::from(55),
            "pedestal_table" => Decimal::from(75),
            "cube_pouf" => Decimal::from(33),
            "showcase_column" => Decimal::from(350),
            "showcase_counter" => Decimal::from(350),
            "coat_rack" => Decimal::from(51),
            "bamboo_plant" => Decimal::from(80),
            "kentia_plant" => Decimal::from(80),

            // Add-ons.
            "badge_scanning" => Decimal::from(150),
            "evening_pass" => Decimal::from(50),

            // Signage and communication.
            "full_signage_pack_m2" => Decimal::from(125),
            "counter_signage" => Decimal::from(180),
            "partition_top_signage_m2" => Decimal::from(50),
            "full_partition_wrap" => Decimal::from(185),
            "high_sign" => Decimal::from(180),
            "half_page_catalogue" => Decimal::from(700),
            "full_page_catalogue" => Decimal::from(1200),
            "inside_cover" => Decimal::from(1800),
            "back_cover" => Decimal::from(2300),
            "floor_plan_logo" => Decimal::from(550),
            "visitor_bag_insert" => Decimal::from(900),
            "hostess_distribution" => Decimal::from(700),

            _ => Decimal::ZERO,
        };
        Money::eur(amount)
    }

    /// Returns the flat package price of the provided option key and tier,
    /// or zero for an unknown combination.
    #[must_use]
    pub fn package_price(&self, key: &str, tier: &str) -> Money {
        let amount = match (key, tier) {
            ("ready_booth", "21") => 6216,
            ("ready_booth", "24") => 7104,
            ("ready_booth", "27") => 7992,
            ("ready_booth", "30") => 8880,
            ("ready_booth", "33") => 9768,
            ("ready_booth", "36") => 10656,
            _ => 0,
        };
        Money::eur(amount)
    }

    /// Returns the price of the provided power upgrade.
    ///
    /// The base 1 kW tier is included with every booth.
    #[must_use]
    pub fn power_upgrade_price(&self, tier: PowerTier) -> Money {
        match tier {
            PowerTier::Base => Money::zero(),
            PowerTier::TwoKw => self.unit_price("power_2kw"),
            PowerTier::FourKw => self.unit_price("power_4kw"),
            PowerTier::SixKw => self.unit_price("power_6kw"),
        }
    }

    /// Number of evening passes included with a booth of the provided
    /// surface. Informational: included passes are never billed.
    #[must_use]
    pub fn included_evening_passes(&self, surface: u32) -> u32 {
        match surface {
            6..=8 => 2,
            9..=11 => 3,
            12..=14 => 4,
            15..=17 => 5,
            s if s >= 18 => 6,
            _ => 0,
        }
    }

    /// Returns the applicable VAT rate.
    #[must_use]
    pub fn vat_rate(&self) -> Percent {
        Percent::new(Decimal::from(20))
            .unwrap_or_else(|| unreachable!("20 is within the percent range"))
    }
}

#[cfg(test)]
mod spec {
    use common::Money;
    use rust_decimal::Decimal;

    use super::Catalog;

    #[test]
    fn unknown_keys_price_at_zero() {
        let catalog = Catalog::current();
        assert_eq!(catalog.unit_price("hologram_projector"), Money::zero());
        assert_eq!(
            catalog.package_price("ready_booth", "13"),
            Money::zero(),
        );
        assert_eq!(catalog.package_price("vip_lounge", "21"), Money::zero());
    }

    #[test]
    fn prices_match_the_season_price_list() {
        let catalog = Catalog::current();
        assert_eq!(
            catalog.unit_price("equipped_booth_m2"),
            Money::eur(270),
        );
        assert_eq!(catalog.unit_price("open_corner"), Money::eur(185));
        assert_eq!(catalog.unit_price("co_exhibitor"), Money::eur(400));
        assert_eq!(
            catalog.unit_price("carpet_color_change"),
            Money::eur(Decimal::new(650, 2)),
        );
        assert_eq!(
            catalog.package_price("ready_booth", "24"),
            Money::eur(7104),
        );
    }

    #[test]
    fn included_passes_follow_surface_tiers() {
        let catalog = Catalog::current();
        for (surface, passes) in
            [(0, 0), (6, 2), (9, 3), (12, 4), (15, 5), (18, 6), (30, 6)]
        {
            assert_eq!(catalog.included_evening_passes(surface), passes);
        }
    }
}
