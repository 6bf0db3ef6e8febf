//! Deterministic quotation totals calculator.

use common::Money;
use rust_decimal::Decimal;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    catalog::Catalog,
    domain::{PowerTier, SelectionSnapshot},
};

/// Single billed line of a quotation [`Section`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct LineItem {
    /// Catalog key of the billed option.
    pub key: String,

    /// Billed quantity.
    pub quantity: u32,

    /// Rounded line total.
    pub amount: Money,
}

/// One of the four quotation sections.
///
/// Rounding happens at accumulation: every line total is rounded to 2
/// decimal places before it's added to the subtotal, so the printed lines
/// always sum exactly to the printed subtotal.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct Section {
    /// Billed lines of this section, in catalog order.
    pub items: Vec<LineItem>,

    /// Sum of the rounded line totals.
    pub subtotal: Money,
}

impl Section {
    /// Rounds the provided line total and records it, skipping zero lines.
    fn push(&mut self, key: &'static str, quantity: u32, amount: Money) {
        let amount = amount.rounded();
        if quantity > 0 && amount.is_positive() {
            self.subtotal += amount;
            self.items.push(LineItem {
                key: key.to_owned(),
                quantity,
                amount,
            });
        }
    }

    /// Records a per-unit line: `quantity` times the catalog price of
    /// `key`.
    fn push_units(&mut self, catalog: &Catalog, key: &'static str, quantity: u32) {
        self.push(key, quantity, catalog.unit_price(key) * Decimal::from(quantity));
    }

    /// Records a single flat-priced line when `selected` holds.
    fn push_flag(&mut self, catalog: &Catalog, key: &'static str, selected: bool) {
        if selected {
            self.push_units(catalog, key, 1);
        }
    }
}

/// Complete priced breakdown of a [`SelectionSnapshot`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct TotalsBreakdown {
    /// Booth and exhibition-space section.
    pub space: Section,

    /// Furnishing section.
    pub furnishing: Section,

    /// Supplementary-services section.
    pub addons: Section,

    /// Signage and communication section.
    pub signage: Section,

    /// Sum of the four section subtotals, before tax.
    pub total_excl_tax: Money,

    /// VAT amount.
    pub tax: Money,

    /// Grand total, tax included.
    pub total_incl_tax: Money,
}

/// Prices the provided [`SelectionSnapshot`] against the [`Catalog`].
///
/// Pure function of its inputs: the same snapshot always produces the same
/// breakdown, and the snapshot itself is never mutated.
#[must_use]
pub fn compute_totals(
    selection: &SelectionSnapshot,
    catalog: &Catalog,
) -> TotalsBreakdown {
    let space = space_section(selection, catalog);
    let furnishing = furnishing_section(selection, catalog);
    let addons = addons_section(selection, catalog);
    let signage = signage_section(selection, catalog);

    let total_excl_tax = space.subtotal
        + furnishing.subtotal
        + addons.subtotal
        + signage.subtotal;
    let tax = catalog.vat_rate().of(total_excl_tax).rounded();
    let total_incl_tax = total_excl_tax + tax;

    TotalsBreakdown {
        space,
        furnishing,
        addons,
        signage,
        total_excl_tax,
        tax,
        total_incl_tax,
    }
}

fn space_section(selection: &SelectionSnapshot, catalog: &Catalog) -> Section {
    use crate::domain::BoothKind as Booth;

    let space = &selection.space;
    let mut out = Section::default();

    match space.booth {
        Some(Booth::Equipped) => {
            out.push_units(catalog, "equipped_booth_m2", space.surface);
        }
        Some(Booth::ReadyMade) => out.push(
            "ready_booth",
            1,
            catalog.package_price("ready_booth", &space.surface.to_string()),
        ),
        Some(Booth::Bare) => {
            out.push_units(catalog, "bare_booth_m2", space.surface);
        }
        None => {}
    }

    out.push_units(catalog, "open_corner", space.clamped_open_corners());
    if space.power_upgrade != PowerTier::Base {
        out.push(
            "power_upgrade",
            1,
            catalog.power_upgrade_price(space.power_upgrade),
        );
    }
    if space.exterior_space {
        out.push_units(
            catalog,
            "exterior_m2",
            space.clamped_exterior_surface(),
        );
    }
    out.push_flag(catalog, "garden_cottage", space.garden_cottage);
    out.push_flag(catalog, "micro_stand", space.micro_stand);
    // Every listed co-exhibitor is billed the flat fee; availability of
    // co-exhibition is the upstream validator's concern.
    let co_exhibitors =
        u32::try_from(space.co_exhibitors.len()).unwrap_or(u32::MAX);
    out.push_units(catalog, "co_exhibitor", co_exhibitors);

    out
}

fn furnishing_section(
    selection: &SelectionSnapshot,
    catalog: &Catalog,
) -> Section {
    let f = &selection.furnishing;
    let mut out = Section::default();

    out.push_units(catalog, "melamine_storeroom", f.melamine_storeroom);
    out.push_units(catalog, "carpet_color_change", f.carpet_color_change);
    out.push_units(catalog, "ceiling_canopy", f.ceiling_canopy);
    out.push_units(catalog, "clad_partition", f.clad_partition);
    out.push_units(catalog, "wood_storeroom", f.wood_storeroom);
    out.push_units(catalog, "signage_strip", f.signage_strip);
    out.push_units(catalog, "spot_rail", f.spot_rail);
    out.push_units(catalog, "counter", f.counter);
    out.push_units(catalog, "stool", f.stool);
    out.push_units(catalog, "standing_table", f.standing_table);
    out.push_units(catalog, "chair", f.chair);
    out.push_units(catalog, "table_120x60", f.table_120x60);
    out.push_units(catalog, "standing_table_pack", f.standing_table_pack);
    out.push_units(catalog, "screen_52", f.screen_52);
    out.push_units(catalog, "fridge_140", f.fridge_140);
    out.push_units(catalog, "fridge_260", f.fridge_260);
    out.push_units(catalog, "display_rack", f.display_rack);
    out.push_units(catalog, "socket_block", f.socket_block);
    out.push_units(catalog, "armchair", f.armchair);
    out.push_units(catalog, "coffee_table", f.coffee_table);
    out.push_units(catalog, "pedestal_table", f.pedestal_table);
    out.push_units(catalog, "cube_pouf", f.cube_pouf);
    out.push_units(catalog, "showcase_column", f.showcase_column);
    out.push_units(catalog, "showcase_counter", f.showcase_counter);
    out.push_units(catalog, "coat_rack", f.coat_rack);
    out.push_units(catalog, "bamboo_plant", f.bamboo_plant);
    out.push_units(catalog, "kentia_plant", f.kentia_plant);

    out
}

fn addons_section(selection: &SelectionSnapshot, catalog: &Catalog) -> Section {
    let addons = &selection.addons;
    let mut out = Section::default();

    out.push_flag(catalog, "badge_scanning", addons.badge_scanning);
    out.push_units(catalog, "evening_pass", addons.extra_evening_passes);

    out
}

fn signage_section(selection: &SelectionSnapshot, catalog: &Catalog) -> Section {
    let signage = &selection.signage;
    let surface = selection.space.surface;
    let mut out = Section::default();

    // Per-square-meter options fall back to one flat unit when no booth
    // surface is known.
    if signage.full_signage_pack {
        out.push_units(catalog, "full_signage_pack_m2", surface.max(1));
    }
    out.push_flag(catalog, "counter_signage", signage.counter_signage);
    if signage.partition_top_signage {
        out.push_units(catalog, "partition_top_signage_m2", surface.max(1));
    }
    out.push_units(catalog, "full_partition_wrap", signage.full_partition_wraps);
    out.push_flag(catalog, "high_sign", signage.high_sign);
    out.push_flag(catalog, "half_page_catalogue", signage.half_page_catalogue);
    out.push_flag(catalog, "full_page_catalogue", signage.full_page_catalogue);
    out.push_flag(catalog, "inside_cover", signage.inside_cover);
    out.push_flag(catalog, "back_cover", signage.back_cover);
    out.push_flag(catalog, "floor_plan_logo", signage.floor_plan_logo);
    out.push_flag(catalog, "visitor_bag_insert", signage.visitor_bag_insert);
    out.push_flag(
        catalog,
        "hostess_distribution",
        signage.hostess_distribution,
    );

    out
}

#[cfg(test)]
mod spec {
    use common::Money;
    use rust_decimal::Decimal;

    use crate::{
        catalog::Catalog,
        domain::{
            AddOns, BoothKind, CoExhibitor, Furnishing, PowerTier,
            SelectionSnapshot, Signage, Space,
        },
    };

    use super::compute_totals;

    fn equipped_12m2() -> SelectionSnapshot {
        SelectionSnapshot {
            space: Space {
                booth: Some(BoothKind::Equipped),
                surface: 12,
                open_corners: 1,
                power_upgrade: PowerTier::TwoKw,
                co_exhibitors: vec![CoExhibitor::default()],
                ..Space::default()
            },
            ..SelectionSnapshot::default()
        }
    }

    #[test]
    fn prices_an_equipped_booth_section() {
        let totals = compute_totals(&equipped_12m2(), &Catalog::current());

        // 12 * 270 + 185 + 220 + 400
        assert_eq!(totals.space.subtotal, Money::eur(4045));
        assert_eq!(totals.space.items.len(), 4);
    }

    #[test]
    fn prices_furnishing_and_addons_by_quantity() {
        let selection = SelectionSnapshot {
            furnishing: Furnishing {
                counter: 2,
                stool: 1,
                ..Furnishing::default()
            },
            addons: AddOns {
                badge_scanning: true,
                extra_evening_passes: 3,
            },
            ..SelectionSnapshot::default()
        };
        let totals = compute_totals(&selection, &Catalog::current());

        assert_eq!(totals.furnishing.subtotal, Money::eur(370));
        assert_eq!(totals.addons.subtotal, Money::eur(300));
        assert_eq!(totals.total_excl_tax, Money::eur(670));
        assert_eq!(totals.tax, Money::eur(134));
        assert_eq!(totals.total_incl_tax, Money::eur(804));
    }

    #[test]
    fn scales_signage_packs_by_booth_surface() {
        let selection = SelectionSnapshot {
            space: Space {
                booth: Some(BoothKind::Bare),
                surface: 18,
                ..Space::default()
            },
            signage: Signage {
                full_signage_pack: true,
                partition_top_signage: true,
                full_partition_wraps: 2,
                ..Signage::default()
            },
            ..SelectionSnapshot::default()
        };
        let totals = compute_totals(&selection, &Catalog::current());

        // 18 * 125 + 18 * 50 + 2 * 185
        assert_eq!(totals.signage.subtotal, Money::eur(3520));
    }

    #[test]
    fn an_empty_snapshot_totals_zero() {
        let totals =
            compute_totals(&SelectionSnapshot::default(), &Catalog::current());

        assert!(totals.total_excl_tax.is_zero());
        assert!(totals.tax.is_zero());
        assert!(totals.total_incl_tax.is_zero());
        assert!(totals.space.items.is_empty());
    }

    #[test]
    fn rounds_each_line_before_accumulating() {
        let selection = SelectionSnapshot {
            furnishing: Furnishing {
                carpet_color_change: 12,
                ..Furnishing::default()
            },
            ..SelectionSnapshot::default()
        };
        let totals = compute_totals(&selection, &Catalog::current());

        // 12 * 6.50
        assert_eq!(totals.furnishing.subtotal, Money::eur(78));
        assert_eq!(
            totals.tax,
            Money::eur(Decimal::new(1560, 2)),
        );
    }

    #[test]
    fn clamps_out_of_range_options() {
        let selection = SelectionSnapshot {
            space: Space {
                booth: Some(BoothKind::Equipped),
                surface: 9,
                open_corners: 5,
                exterior_space: true,
                exterior_surface: 900,
                co_exhibitors: vec![CoExhibitor::default(); 3],
                ..Space::default()
            },
            ..SelectionSnapshot::default()
        };
        let totals = compute_totals(&selection, &Catalog::current());

        // 9 * 270 + 2 * 185 + 80 * 50 + 3 * 400
        assert_eq!(totals.space.subtotal, Money::eur(8000));
    }

    #[test]
    fn bills_every_co_exhibitor_regardless_of_booth() {
        let small_booth = SelectionSnapshot {
            space: Space {
                booth: Some(BoothKind::Equipped),
                surface: 9,
                co_exhibitors: vec![CoExhibitor::default()],
                ..Space::default()
            },
            ..SelectionSnapshot::default()
        };
        let totals = compute_totals(&small_booth, &Catalog::current());
        // 9 * 270 + 400
        assert_eq!(totals.space.subtotal, Money::eur(2830));

        let no_booth = SelectionSnapshot {
            space: Space {
                co_exhibitors: vec![CoExhibitor::default(); 2],
                ..Space::default()
            },
            ..SelectionSnapshot::default()
        };
        let totals = compute_totals(&no_booth, &Catalog::current());
        assert_eq!(totals.space.subtotal, Money::eur(800));
    }

    #[test]
    fn bills_the_cottage_without_exterior_space() {
        let selection = SelectionSnapshot {
            space: Space {
                garden_cottage: true,
                ..Space::default()
            },
            ..SelectionSnapshot::default()
        };
        let totals = compute_totals(&selection, &Catalog::current());

        assert_eq!(totals.space.subtotal, Money::eur(800));
    }

    #[test]
    fn is_pure_and_repeatable() {
        let selection = equipped_12m2();
        let catalog = Catalog::current();
        let first = compute_totals(&selection, &catalog);
        let second = compute_totals(&selection, &catalog);
        assert_eq!(first, second);
    }
}
