//! [`SelectionSnapshot`] definitions.

use common::define_kind;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum billable exterior surface, in square meters.
pub const MAX_EXTERIOR_SURFACE: u32 = 80;

/// Immutable snapshot of every option an exhibitor selected in the
/// registration wizard.
///
/// The snapshot is produced anew by the (external) wizard on every edit and
/// is read-only here: the engine clamps the two documented out-of-range
/// cases (exterior surface, open-corner ceiling) and otherwise trusts the
/// upstream validator.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(default)
)]
pub struct SelectionSnapshot {
    /// Booth and exhibition-space options.
    pub space: Space,

    /// Furnishing quantities and colour choices.
    pub furnishing: Furnishing,

    /// Supplementary services.
    pub addons: AddOns,

    /// Signage and communication options.
    pub signage: Signage,
}

/// Booth and exhibition-space options.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(default)
)]
pub struct Space {
    /// Kind of the reserved booth, if any.
    pub booth: Option<BoothKind>,

    /// Booth surface, in square meters.
    pub surface: u32,

    /// Requested number of open corners.
    pub open_corners: u32,

    /// Requested electrical power upgrade.
    pub power_upgrade: PowerTier,

    /// Whether an exterior exhibition surface is requested.
    pub exterior_space: bool,

    /// Raw requested exterior surface, in square meters.
    ///
    /// Clamped to `[0, MAX_EXTERIOR_SURFACE]` before any pricing.
    pub exterior_surface: i64,

    /// Whether a garden cottage is requested.
    pub garden_cottage: bool,

    /// Whether a micro-stand is requested.
    pub micro_stand: bool,

    /// Co-exhibitors sharing the booth, each billed a flat fee.
    pub co_exhibitors: Vec<CoExhibitor>,
}

impl Space {
    /// Returns the exterior surface clamped to its billable range.
    #[must_use]
    pub fn clamped_exterior_surface(&self) -> u32 {
        u32::try_from(
            self.exterior_surface
                .clamp(0, i64::from(MAX_EXTERIOR_SURFACE)),
        )
        .unwrap_or(0)
    }

    /// Returns the open-corner count clamped to the ceiling allowed by the
    /// chosen booth kind.
    #[must_use]
    pub fn clamped_open_corners(&self) -> u32 {
        self.open_corners
            .min(self.booth.map_or(0, BoothKind::max_open_corners))
    }

    /// Indicates whether co-exhibition may be offered for this booth.
    ///
    /// Booths under 12 m² cannot host a co-exhibitor.
    #[must_use]
    pub fn co_exhibition_available(&self) -> bool {
        self.booth.is_some() && self.surface >= 12
    }
}

define_kind! {
    #[doc = "Kind of a reserved booth."]
    enum BoothKind {
        #[doc = "Equipped booth, priced per square meter."]
        Equipped = 1,

        #[doc = "Ready-made turnkey package, priced per fixed surface."]
        ReadyMade = 2,

        #[doc = "Bare space, priced per square meter."]
        Bare = 3,
    }
}

impl BoothKind {
    /// Maximum number of open corners allowed for this booth kind.
    #[must_use]
    pub fn max_open_corners(self) -> u32 {
        match self {
            Self::Equipped => 2,
            Self::ReadyMade => 4,
            Self::Bare => 0,
        }
    }

    /// Label of this booth kind as printed on the contract.
    #[must_use]
    pub fn contract_label(self) -> &'static str {
        match self {
            Self::Equipped => "STAND ÉQUIPÉ",
            Self::ReadyMade => "PRÊT À EXPOSER",
            Self::Bare => "STAND NU",
        }
    }
}

define_kind! {
    #[doc = "Electrical power tier of a booth."]
    enum PowerTier {
        #[doc = "1 kW, included with every booth."]
        Base = 1,

        #[doc = "2 kW upgrade."]
        TwoKw = 2,

        #[doc = "4 kW upgrade."]
        FourKw = 3,

        #[doc = "6 kW upgrade."]
        SixKw = 4,
    }
}

impl PowerTier {
    /// Label of this power tier as printed on the contract.
    #[must_use]
    pub fn contract_label(self) -> &'static str {
        match self {
            Self::Base => "1 kW",
            Self::TwoKw => "2 kW",
            Self::FourKw => "4 kW",
            Self::SixKw => "6 kW",
        }
    }
}

impl Default for PowerTier {
    fn default() -> Self {
        Self::Base
    }
}

/// Secondary company sharing an exhibitor's booth.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(default)
)]
pub struct CoExhibitor {
    /// Company name of the co-exhibitor.
    pub company_name: String,

    /// Last name of the co-exhibitor's contact.
    pub contact_last_name: String,

    /// First name of the co-exhibitor's contact.
    pub contact_first_name: String,

    /// Phone number of the co-exhibitor's contact.
    pub contact_phone: String,

    /// Email of the co-exhibitor's contact.
    pub contact_email: String,
}

/// Furnishing quantities and colour choices.
///
/// Quantities are non-negative by construction; per-item ceilings are the
/// upstream validator's concern.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(default)
)]
pub struct Furnishing {
    /// 1 m² melamine-walled storerooms with door.
    pub melamine_storeroom: u32,

    /// Carpet colour change, per square meter.
    pub carpet_color_change: u32,

    /// Chosen carpet colour.
    pub carpet_color: String,

    /// Ceiling canopy, per square meter.
    pub ceiling_canopy: u32,

    /// Fabric-clad wood partition, per linear meter.
    pub clad_partition: u32,

    /// 1 m² wood-walled storerooms with door.
    pub wood_storeroom: u32,

    /// Signage strip, per linear meter.
    pub signage_strip: u32,

    /// Additional 3-spot light rails.
    pub spot_rail: u32,

    /// Reception counters.
    pub counter: u32,

    /// Bar stools.
    pub stool: u32,

    /// Standing tables.
    pub standing_table: u32,

    /// Chairs.
    pub chair: u32,

    /// 120×60 cm tables.
    pub table_120x60: u32,

    /// Standing-table + 3 stools packs.
    pub standing_table_pack: u32,

    /// 52-inch screens on stands.
    pub screen_52: u32,

    /// 140 L fridges.
    pub fridge_140: u32,

    /// 260 L fridges.
    pub fridge_260: u32,

    /// A4 display racks.
    pub display_rack: u32,

    /// 3-socket blocks.
    pub socket_block: u32,

    /// Armchairs.
    pub armchair: u32,

    /// Round coffee tables.
    pub coffee_table: u32,

    /// High pedestal tables.
    pub pedestal_table: u32,

    /// Cube poufs.
    pub cube_pouf: u32,

    /// Chosen pouf colour.
    pub pouf_color: String,

    /// Showcase columns.
    pub showcase_column: u32,

    /// Showcase counters.
    pub showcase_counter: u32,

    /// Coat racks.
    pub coat_rack: u32,

    /// Bamboo plants.
    pub bamboo_plant: u32,

    /// Kentia plants.
    pub kentia_plant: u32,
}

/// Supplementary services.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(default)
)]
pub struct AddOns {
    /// Visitor badge scanning service.
    pub badge_scanning: bool,

    /// Extra evening passes, beyond the ones included with the booth.
    pub extra_evening_passes: u32,
}

/// Signage and communication options.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(default)
)]
pub struct Signage {
    /// Full signage pack, priced per booth square meter.
    pub full_signage_pack: bool,

    /// Counter signage.
    pub counter_signage: bool,

    /// Partition-top signage, priced per booth square meter.
    pub partition_top_signage: bool,

    /// Full partition wraps, priced per partition.
    pub full_partition_wraps: u32,

    /// High hanging sign.
    pub high_sign: bool,

    /// Half-page catalogue advertisement.
    pub half_page_catalogue: bool,

    /// Full-page catalogue advertisement.
    pub full_page_catalogue: bool,

    /// Catalogue inside cover.
    pub inside_cover: bool,

    /// Catalogue back cover.
    pub back_cover: bool,

    /// Logo on the exhibition floor plan.
    pub floor_plan_logo: bool,

    /// Documentation inserted in visitor bags.
    pub visitor_bag_insert: bool,

    /// Distribution by a hostess.
    pub hostess_distribution: bool,
}

#[cfg(test)]
mod spec {
    use super::{BoothKind, Space};

    #[test]
    fn clamps_exterior_surface() {
        for (raw, expected) in
            [(-5, 0), (0, 0), (45, 45), (80, 80), (500, 80)]
        {
            let space = Space {
                exterior_surface: raw,
                ..Space::default()
            };
            assert_eq!(space.clamped_exterior_surface(), expected);
        }
    }

    #[test]
    fn clamps_open_corners_to_booth_ceiling() {
        let cases = [
            (None, 3, 0),
            (Some(BoothKind::Bare), 2, 0),
            (Some(BoothKind::Equipped), 3, 2),
            (Some(BoothKind::Equipped), 1, 1),
            (Some(BoothKind::ReadyMade), 6, 4),
        ];
        for (booth, requested, expected) in cases {
            let space = Space {
                booth,
                open_corners: requested,
                ..Space::default()
            };
            assert_eq!(space.clamped_open_corners(), expected);
        }
    }

    #[test]
    fn co_exhibition_requires_a_12m2_booth() {
        let mut space = Space {
            booth: Some(BoothKind::Equipped),
            surface: 12,
            ..Space::default()
        };
        assert!(space.co_exhibition_available());

        space.surface = 9;
        assert!(!space.co_exhibition_available());

        space.booth = None;
        space.surface = 24;
        assert!(!space.co_exhibition_available());
    }
}
