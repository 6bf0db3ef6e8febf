//! Explicit mapping of known contract template field identifiers.
//!
//! This table is authoritative: it covers every field of the current
//! participation contract template by its exact identifier. Amount fields
//! carry the line total (quantity times unit price), never the unit price
//! alone, because the printed columns are expected to sum to the section
//! totals.

use std::{collections::HashMap, sync::OnceLock};

use common::SignatureDate;
use rust_decimal::Decimal;

use crate::domain::{BoothKind, PaymentMode, PowerTier};

use super::{FieldKind, FieldValue, MappingContext};

/// Resolver function of a single explicit mapping.
pub type Resolve = fn(&MappingContext<'_>) -> Option<FieldValue>;

/// Explicit mapping of one template field identifier.
#[derive(Clone, Copy, Debug)]
pub struct Mapping {
    /// Kind of the template field this mapping targets.
    pub kind: FieldKind,

    /// Value-producing function of this mapping.
    pub resolve: Resolve,
}

/// Looks up the explicit [`Mapping`] of the provided exact identifier.
#[must_use]
pub fn lookup(identifier: &str) -> Option<&'static Mapping> {
    table().get(identifier)
}

/// Indicates whether the provided exact identifier has an explicit
/// [`Mapping`].
#[must_use]
pub fn covers(identifier: &str) -> bool {
    table().contains_key(identifier)
}

fn text(s: &str) -> Option<FieldValue> {
    Some(FieldValue::text(s))
}

fn empty() -> Option<FieldValue> {
    Some(FieldValue::Text(String::new()))
}

fn flag(on: bool) -> Option<FieldValue> {
    Some(FieldValue::Flag(on))
}

fn quantity(q: u32) -> Option<FieldValue> {
    if q > 0 {
        text(&q.to_string())
    } else {
        empty()
    }
}

/// Line total of `q` units of the catalog option `key`.
fn line(ctx: &MappingContext<'_>, key: &str, q: u32) -> Option<FieldValue> {
    if q > 0 {
        Some(FieldValue::amount(
            ctx.catalog.unit_price(key) * Decimal::from(q),
        ))
    } else {
        empty()
    }
}

/// Booth surface printed on the row of the provided booth kind.
///
/// In preview-all mode every row renders a representative surface so the
/// whole template can be proofed at once.
fn booth_surface(ctx: &MappingContext<'_>, kind: BoothKind) -> u32 {
    let space = &ctx.selection.space;
    if space.booth == Some(kind) {
        space.surface
    } else if ctx.preview_all {
        preview_surface(ctx)
    } else {
        0
    }
}

fn preview_surface(ctx: &MappingContext<'_>) -> u32 {
    let surface = ctx.selection.space.surface;
    if surface > 0 {
        surface
    } else {
        18
    }
}

fn booth_corners(ctx: &MappingContext<'_>, kind: BoothKind) -> u32 {
    let space = &ctx.selection.space;
    if space.booth == Some(kind) {
        space.clamped_open_corners()
    } else if ctx.preview_all {
        let clamped = space.clamped_open_corners();
        if clamped > 0 {
            clamped
        } else {
            2
        }
    } else {
        0
    }
}

fn ready_size_checked(ctx: &MappingContext<'_>, size: u32) -> Option<FieldValue> {
    let space = &ctx.selection.space;
    let selected =
        space.booth == Some(BoothKind::ReadyMade) && space.surface == size;
    flag(selected || (ctx.preview_all && preview_surface(ctx) == size))
}

fn power_quantity(ctx: &MappingContext<'_>, tier: PowerTier) -> Option<FieldValue> {
    let selected = ctx.selection.space.power_upgrade == tier;
    quantity(u32::from(selected || ctx.preview_all))
}

fn power_amount(ctx: &MappingContext<'_>, tier: PowerTier) -> Option<FieldValue> {
    if ctx.selection.space.power_upgrade == tier || ctx.preview_all {
        Some(FieldValue::amount(ctx.catalog.power_upgrade_price(tier)))
    } else {
        empty()
    }
}

fn exterior_quantity(ctx: &MappingContext<'_>) -> u32 {
    let space = &ctx.selection.space;
    if !space.exterior_space && !ctx.preview_all {
        return 0;
    }
    let clamped = space.clamped_exterior_surface();
    if clamped > 0 {
        clamped
    } else if ctx.preview_all {
        12
    } else {
        0
    }
}

fn payment_cross(ctx: &MappingContext<'_>, mode: PaymentMode) -> Option<FieldValue> {
    if ctx.engagement.payment_mode == mode {
        text("X")
    } else {
        empty()
    }
}

fn signature_date(ctx: &MappingContext<'_>) -> Option<FieldValue> {
    let date = ctx.engagement.signed_on.unwrap_or_else(SignatureDate::today);
    text(&date.to_string())
}

macro_rules! entries {
    ($( $name:literal => $kind:ident, $resolve:expr; )+) => {{
        let mut map = HashMap::new();
        $(
            let _ = map.insert($name, Mapping {
                kind: FieldKind::$kind,
                resolve: $resolve,
            });
        )+
        map
    }};
}

#[expect(clippy::too_many_lines, reason = "flat declarative field table")]
fn table() -> &'static HashMap<&'static str, Mapping> {
    static TABLE: OnceLock<HashMap<&'static str, Mapping>> = OnceLock::new();
    TABLE.get_or_init(|| {
        entries! {
            // Identity.
            "raison_social" => Text, |ctx| {
                let e = ctx.exhibitor;
                if e.company_name.is_empty() {
                    text(&e.trade_name)
                } else {
                    text(&e.company_name)
                }
            };
            "adresse" => Text, |ctx| text(&ctx.exhibitor.address);
            "code_postal" => Text, |ctx| text(&ctx.exhibitor.postal_code);
            "ville" => Text, |ctx| text(&ctx.exhibitor.city);
            "pays" => Text, |ctx| text(&ctx.exhibitor.country);
            "tel" => Text, |ctx| text(&ctx.exhibitor.phone);
            "site_internet" => Text, |ctx| text(&ctx.exhibitor.website);
            "siret" => Text, |ctx| text(&ctx.exhibitor.siret);
            "tva" => Text, |ctx| text(&ctx.exhibitor.vat_number);
            "membre" => Checkbox,
                |ctx| flag(ctx.exhibitor.association_member);
            "expo_2024" => Checkbox,
                |ctx| flag(ctx.exhibitor.exhibited_last_year);

            // Activity sectors.
            "act_indus" => Checkbox, |ctx| flag(ctx.exhibitor.sectors.industry);
            "act_logistique" => Checkbox,
                |ctx| flag(ctx.exhibitor.sectors.transport_logistics);
            "act_btp" => Checkbox,
                |ctx| flag(ctx.exhibitor.sectors.construction);
            "act_dev_durable" => Checkbox,
                |ctx| flag(ctx.exhibitor.sectors.environment_energy);
            "act_service" => Checkbox,
                |ctx| flag(ctx.exhibitor.sectors.business_services);
            "act_new_tech" => Checkbox,
                |ctx| flag(ctx.exhibitor.sectors.media_new_tech);
            "act_tourisme" => Checkbox,
                |ctx| flag(ctx.exhibitor.sectors.tourism_wellness);
            "act_autre" => Checkbox, |ctx| flag(ctx.exhibitor.sectors.other);
            "act_autre_text" => Text,
                |ctx| text(&ctx.exhibitor.sectors.other_label);

            // Billing and accounting.
            "fac_adresse" => Text, |ctx| text(&ctx.exhibitor.billing.address);
            "fac_code_postal" => Text,
                |ctx| text(&ctx.exhibitor.billing.postal_code);
            "fac_ville" => Text, |ctx| text(&ctx.exhibitor.billing.city);
            "fac_pays" => Text, |ctx| text(&ctx.exhibitor.billing.country);
            "compta_contact" => Text,
                |ctx| text(&ctx.exhibitor.accounting.name);
            "compta_tel" => Text, |ctx| text(&ctx.exhibitor.accounting.phone);
            "compta_mail" => Text, |ctx| text(&ctx.exhibitor.accounting.email);

            // Contacts.
            "resp_nom" => Text, |ctx| text(&ctx.exhibitor.manager.last_name);
            "resp_prenom" => Text,
                |ctx| text(&ctx.exhibitor.manager.first_name);
            "resp_tel" => Text, |ctx| text(&ctx.exhibitor.manager.phone);
            "resp_mail" => Text, |ctx| text(&ctx.exhibitor.manager.email);
            "resp_ope_nom" => Text,
                |ctx| text(&ctx.exhibitor.operations.last_name);
            "resp_ope_prenom" => Text,
                |ctx| text(&ctx.exhibitor.operations.first_name);
            "resp_ope_tel" => Text, |ctx| text(&ctx.exhibitor.operations.phone);
            "resp_ope_mail" => Text,
                |ctx| text(&ctx.exhibitor.operations.email);

            // Booth rows.
            "std_equipe_surface" => Text,
                |ctx| quantity(booth_surface(ctx, BoothKind::Equipped));
            "std_equipe_prix_ht" => Text, |ctx| line(
                ctx,
                "equipped_booth_m2",
                booth_surface(ctx, BoothKind::Equipped),
            );
            "std_nu_surface_qte" => Text,
                |ctx| quantity(booth_surface(ctx, BoothKind::Bare));
            "std_nu_prix_ht" => Text, |ctx| line(
                ctx,
                "bare_booth_m2",
                booth_surface(ctx, BoothKind::Bare),
            );
            "std_expo_surface_12" => Checkbox, |ctx| ready_size_checked(ctx, 12);
            "std_expo_surface_15" => Checkbox, |ctx| ready_size_checked(ctx, 15);
            "std_expo_surface_18" => Checkbox, |ctx| ready_size_checked(ctx, 18);
            "std_expo_prix_ht" => Text, |ctx| {
                let surface = booth_surface(ctx, BoothKind::ReadyMade);
                if surface > 0 {
                    Some(FieldValue::amount(ctx.catalog.package_price(
                        "ready_booth",
                        &surface.to_string(),
                    )))
                } else {
                    empty()
                }
            };
            "std_equipe_angle_qte" => Text,
                |ctx| quantity(booth_corners(ctx, BoothKind::Equipped));
            "std_equipe_angle_prix_ht" => Text, |ctx| line(
                ctx,
                "open_corner",
                booth_corners(ctx, BoothKind::Equipped),
            );
            "std_expo_angle_qte" => Text,
                |ctx| quantity(booth_corners(ctx, BoothKind::ReadyMade));
            "std_expo_angle_prix_ht" => Text, |ctx| line(
                ctx,
                "open_corner",
                booth_corners(ctx, BoothKind::ReadyMade),
            );
            "std_nu_angle_qte" => Text,
                |ctx| quantity(booth_corners(ctx, BoothKind::Bare));
            "std_nu_angle_prix_ht" => Text, |ctx| line(
                ctx,
                "open_corner",
                booth_corners(ctx, BoothKind::Bare),
            );

            // Power upgrades.
            "elec_1_qte" => Text, |ctx| power_quantity(ctx, PowerTier::TwoKw);
            "elec_2_qte" => Text, |ctx| power_quantity(ctx, PowerTier::FourKw);
            "elec_3_qte" => Text, |ctx| power_quantity(ctx, PowerTier::SixKw);
            "elec_1_prix_ht" => Text, |ctx| power_amount(ctx, PowerTier::TwoKw);
            "elec_2_prix_ht" => Text, |ctx| power_amount(ctx, PowerTier::FourKw);
            "elec_3_prix_ht" => Text, |ctx| power_amount(ctx, PowerTier::SixKw);

            // Exterior space.
            "std_ext_surface_qte" => Text,
                |ctx| quantity(exterior_quantity(ctx));
            "std_ext_prix_ht" => Text,
                |ctx| line(ctx, "exterior_m2", exterior_quantity(ctx));

            // Furnishing quantities.
            "reserve_melamine_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.melamine_storeroom);
            "moquette_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.carpet_color_change);
            "velum_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.ceiling_canopy);
            "cloison_bois_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.clad_partition);
            "reserve_bois_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.wood_storeroom);
            "bandeau_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.signage_strip);
            "rail_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.spot_rail);

            // Furnishing line totals.
            "reserve_melamine_prix" => Text, |ctx| line(
                ctx,
                "melamine_storeroom",
                ctx.selection.furnishing.melamine_storeroom,
            );
            "moquette_prix" => Text, |ctx| line(
                ctx,
                "carpet_color_change",
                ctx.selection.furnishing.carpet_color_change,
            );
            "velum_prix" => Text, |ctx| line(
                ctx,
                "ceiling_canopy",
                ctx.selection.furnishing.ceiling_canopy,
            );
            "cloison_bois_prix" => Text, |ctx| line(
                ctx,
                "clad_partition",
                ctx.selection.furnishing.clad_partition,
            );
            "reserve_bois_prix" => Text, |ctx| line(
                ctx,
                "wood_storeroom",
                ctx.selection.furnishing.wood_storeroom,
            );
            "bandeau_prix_ht" => Text, |ctx| line(
                ctx,
                "signage_strip",
                ctx.selection.furnishing.signage_strip,
            );
            "rail_prix" => Text,
                |ctx| line(ctx, "spot_rail", ctx.selection.furnishing.spot_rail);

            // Furniture quantities.
            "comptoir_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.counter);
            "tabouret_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.stool);
            "mange_debout_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.standing_table);
            "chaise_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.chair);
            "table_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.table_120x60);
            "pck_mange_tabouret_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.standing_table_pack);
            "ecran_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.screen_52);
            "frigo_140_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.fridge_140);
            "frigo_260_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.fridge_260);
            "presentoir_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.display_rack);
            "bloc_prise_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.socket_block);
            "fauteuil_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.armchair);
            "table_basse_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.coffee_table);
            "gueridon_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.pedestal_table);
            "pouf_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.cube_pouf);
            "colonne_vitrine_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.showcase_column);
            "comptoir_vitrine_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.showcase_counter);
            "porte_menteaux_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.coat_rack);
            "plante_bambou_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.bamboo_plant);
            "plante_kentia_qte" => Text,
                |ctx| quantity(ctx.selection.furnishing.kentia_plant);

            // Furniture line totals.
            "comptoir_prix_ht" => Text,
                |ctx| line(ctx, "counter", ctx.selection.furnishing.counter);
            "tabouret_prix_ht" => Text,
                |ctx| line(ctx, "stool", ctx.selection.furnishing.stool);
            "mange_debout_prix_ht" => Text, |ctx| line(
                ctx,
                "standing_table",
                ctx.selection.furnishing.standing_table,
            );
            "chaise_prix_ht" => Text,
                |ctx| line(ctx, "chair", ctx.selection.furnishing.chair);
            "table_prix_ht" => Text, |ctx| line(
                ctx,
                "table_120x60",
                ctx.selection.furnishing.table_120x60,
            );
            "pck_mange_tabouret_prix_ht" => Text, |ctx| line(
                ctx,
                "standing_table_pack",
                ctx.selection.furnishing.standing_table_pack,
            );
            "ecran_prix_ht" => Text,
                |ctx| line(ctx, "screen_52", ctx.selection.furnishing.screen_52);
            "frigo_140_prix_ht" => Text,
                |ctx| line(ctx, "fridge_140", ctx.selection.furnishing.fridge_140);
            "frigo_260_prix_ht" => Text,
                |ctx| line(ctx, "fridge_260", ctx.selection.furnishing.fridge_260);
            "presentoir_prix_ht" => Text, |ctx| line(
                ctx,
                "display_rack",
                ctx.selection.furnishing.display_rack,
            );
            "bloc_prix_ht" => Text, |ctx| line(
                ctx,
                "socket_block",
                ctx.selection.furnishing.socket_block,
            );
            "fauteuil_prix_ht" => Text,
                |ctx| line(ctx, "armchair", ctx.selection.furnishing.armchair);
            "table_basse_prix_ht" => Text, |ctx| line(
                ctx,
                "coffee_table",
                ctx.selection.furnishing.coffee_table,
            );
            "gueridon_prix_ht" => Text, |ctx| line(
                ctx,
                "pedestal_table",
                ctx.selection.furnishing.pedestal_table,
            );
            "pouf_prix_ht" => Text,
                |ctx| line(ctx, "cube_pouf", ctx.selection.furnishing.cube_pouf);
            "colonne_vitrine_prix_ht" => Text, |ctx| line(
                ctx,
                "showcase_column",
                ctx.selection.furnishing.showcase_column,
            );
            "comptoir_vitrine_prix_ht" => Text, |ctx| line(
                ctx,
                "showcase_counter",
                ctx.selection.furnishing.showcase_counter,
            );
            "porte_menteaux_prix_ht" => Text,
                |ctx| line(ctx, "coat_rack", ctx.selection.furnishing.coat_rack);
            "plante_bambou_prix_ht" => Text, |ctx| line(
                ctx,
                "bamboo_plant",
                ctx.selection.furnishing.bamboo_plant,
            );
            "plante_kentia_prix_ht" => Text, |ctx| line(
                ctx,
                "kentia_plant",
                ctx.selection.furnishing.kentia_plant,
            );

            // Supplementary services.
            "scan_badge" => Checkbox,
                |ctx| flag(ctx.selection.addons.badge_scanning);
            "scan_badge_prix_ht" => Text, |ctx| line(
                ctx,
                "badge_scanning",
                u32::from(ctx.selection.addons.badge_scanning),
            );
            "pass_soiree_qte" => Text,
                |ctx| quantity(ctx.selection.addons.extra_evening_passes);
            "pass_soiree_prix_ht" => Text, |ctx| line(
                ctx,
                "evening_pass",
                ctx.selection.addons.extra_evening_passes,
            );

            // Booth signage. Per-square-meter packs print a line total
            // scaled by the booth surface, matching the calculator.
            "signa_pck_qte" => Text,
                |ctx| quantity(u32::from(ctx.selection.signage.full_signage_pack));
            "signa_pck_prix_ht" => Text, |ctx| {
                if ctx.selection.signage.full_signage_pack {
                    line(
                        ctx,
                        "full_signage_pack_m2",
                        ctx.selection.space.surface.max(1),
                    )
                } else {
                    empty()
                }
            };
            "signa_comptoir_qte" => Text,
                |ctx| quantity(u32::from(ctx.selection.signage.counter_signage));
            "signa_comptoir_prix_ht" => Text, |ctx| line(
                ctx,
                "counter_signage",
                u32::from(ctx.selection.signage.counter_signage),
            );
            "signa_haut_qte" => Text, |ctx| quantity(u32::from(
                ctx.selection.signage.partition_top_signage,
            ));
            "signa_haut_prix_ht" => Text, |ctx| {
                if ctx.selection.signage.partition_top_signage {
                    line(
                        ctx,
                        "partition_top_signage_m2",
                        ctx.selection.space.surface.max(1),
                    )
                } else {
                    empty()
                }
            };
            "signa_complete_qte" => Text,
                |ctx| quantity(ctx.selection.signage.full_partition_wraps);
            "signa_complete_prix_ht" => Text, |ctx| line(
                ctx,
                "full_partition_wrap",
                ctx.selection.signage.full_partition_wraps,
            );
            "signa_enseigne_haute_qte" => Text,
                |ctx| quantity(u32::from(ctx.selection.signage.high_sign));
            "signa_enseigne_haute_prix_ht" => Text, |ctx| line(
                ctx,
                "high_sign",
                u32::from(ctx.selection.signage.high_sign),
            );

            // Communication.
            "comm_catalogue" => Text, |ctx| line(
                ctx,
                "full_page_catalogue",
                u32::from(ctx.selection.signage.full_page_catalogue),
            );
            "comm_demi_catalogue" => Text, |ctx| line(
                ctx,
                "half_page_catalogue",
                u32::from(ctx.selection.signage.half_page_catalogue),
            );
            "comm_catalogue_deuxieme" => Text, |ctx| line(
                ctx,
                "inside_cover",
                u32::from(ctx.selection.signage.inside_cover),
            );
            "comm_catalogue_quatrieme" => Text, |ctx| line(
                ctx,
                "back_cover",
                u32::from(ctx.selection.signage.back_cover),
            );
            "comm_logo_plan" => Text, |ctx| line(
                ctx,
                "floor_plan_logo",
                u32::from(ctx.selection.signage.floor_plan_logo),
            );
            "comm_sac" => Text, |ctx| line(
                ctx,
                "visitor_bag_insert",
                u32::from(ctx.selection.signage.visitor_bag_insert),
            );
            "comm_hotesse" => Text, |ctx| line(
                ctx,
                "hostess_distribution",
                u32::from(ctx.selection.signage.hostess_distribution),
            );
            "comm_papier" => Text, |_| empty();

            // Section and grand totals.
            "total_ht_1" => Text,
                |ctx| Some(FieldValue::amount(ctx.totals.space.subtotal));
            "total_ht_2" => Text,
                |ctx| Some(FieldValue::amount(ctx.totals.furnishing.subtotal));
            "total_ht_3" => Text,
                |ctx| Some(FieldValue::amount(ctx.totals.addons.subtotal));
            "total_ht_4" => Text,
                |ctx| Some(FieldValue::amount(ctx.totals.signage.subtotal));
            "total_ht" => Text,
                |ctx| Some(FieldValue::amount(ctx.totals.total_excl_tax));
            "total_tva" => Text, |ctx| Some(FieldValue::amount(ctx.totals.tax));
            "total_ttc" => Text,
                |ctx| Some(FieldValue::amount(ctx.totals.total_incl_tax));

            // Engagement.
            "date" => Text, signature_date;
            "acompte" => Text, |ctx| payment_cross(ctx, PaymentMode::Deposit);
            "solde" => Text, |ctx| payment_cross(ctx, PaymentMode::Balance);
            "virement" => Text, |ctx| payment_cross(ctx, PaymentMode::Transfer);

            // Present on the template but unused.
            "fax" => Text, |_| empty();
        }
    })
}

#[cfg(test)]
mod spec {
    use common::Money;

    use crate::{
        catalog::Catalog,
        domain::{
            BoothKind, Engagement, Exhibitor, Furnishing, PaymentMode,
            SelectionSnapshot, Space,
        },
        totals::compute_totals,
    };

    use super::{
        super::{FieldValue, MappingContext},
        covers, lookup,
    };

    fn resolve_with(
        identifier: &str,
        selection: &SelectionSnapshot,
        engagement: &Engagement,
    ) -> Option<FieldValue> {
        let exhibitor = Exhibitor::default();
        let catalog = Catalog::current();
        let totals = compute_totals(selection, &catalog);
        let ctx = MappingContext {
            exhibitor: &exhibitor,
            selection,
            engagement,
            totals: &totals,
            catalog: &catalog,
            preview_all: false,
        };
        let mapping = lookup(identifier)?;
        (mapping.resolve)(&ctx)
    }

    #[test]
    fn amount_fields_carry_line_totals_not_unit_prices() {
        let selection = SelectionSnapshot {
            furnishing: Furnishing {
                counter: 2,
                ..Furnishing::default()
            },
            ..SelectionSnapshot::default()
        };
        let engagement = Engagement::default();

        assert_eq!(
            resolve_with("comptoir_qte", &selection, &engagement),
            Some(FieldValue::text("2")),
        );
        // 2 * 165, not 165.
        assert_eq!(
            resolve_with("comptoir_prix_ht", &selection, &engagement),
            Some(FieldValue::text("330,00")),
        );
    }

    #[test]
    fn booth_rows_only_render_for_the_selected_kind() {
        let selection = SelectionSnapshot {
            space: Space {
                booth: Some(BoothKind::Bare),
                surface: 24,
                ..Space::default()
            },
            ..SelectionSnapshot::default()
        };
        let engagement = Engagement::default();

        assert_eq!(
            resolve_with("std_nu_surface_qte", &selection, &engagement),
            Some(FieldValue::text("24")),
        );
        assert_eq!(
            resolve_with("std_nu_prix_ht", &selection, &engagement),
            Some(FieldValue::text("5400,00")),
        );
        assert_eq!(
            resolve_with("std_equipe_surface", &selection, &engagement),
            Some(FieldValue::text("")),
        );
    }

    #[test]
    fn ready_pack_rows_use_the_package_price() {
        let selection = SelectionSnapshot {
            space: Space {
                booth: Some(BoothKind::ReadyMade),
                surface: 24,
                ..Space::default()
            },
            ..SelectionSnapshot::default()
        };
        let engagement = Engagement::default();

        assert_eq!(
            resolve_with("std_expo_prix_ht", &selection, &engagement),
            Some(FieldValue::text("7104,00")),
        );
    }

    #[test]
    fn payment_mode_prints_a_single_cross() {
        let selection = SelectionSnapshot::default();
        let engagement = Engagement {
            payment_mode: PaymentMode::Balance,
            ..Engagement::default()
        };

        assert_eq!(
            resolve_with("acompte", &selection, &engagement),
            Some(FieldValue::text("")),
        );
        assert_eq!(
            resolve_with("solde", &selection, &engagement),
            Some(FieldValue::text("X")),
        );
        assert_eq!(
            resolve_with("virement", &selection, &engagement),
            Some(FieldValue::text("")),
        );
    }

    #[test]
    fn totals_fields_mirror_the_breakdown() {
        let selection = SelectionSnapshot {
            space: Space {
                booth: Some(BoothKind::Equipped),
                surface: 12,
                ..Space::default()
            },
            ..SelectionSnapshot::default()
        };
        let engagement = Engagement::default();
        let totals = compute_totals(&selection, &Catalog::current());
        assert_eq!(totals.space.subtotal, Money::eur(3240));

        assert_eq!(
            resolve_with("total_ht_1", &selection, &engagement),
            Some(FieldValue::text("3240,00")),
        );
        assert_eq!(
            resolve_with("total_ttc", &selection, &engagement),
            Some(FieldValue::text("3888,00")),
        );
    }

    #[test]
    fn covers_reports_explicit_entries_only() {
        assert!(covers("raison_social"));
        assert!(covers("total_ttc"));
        assert!(!covers("logo_salon_header"));
    }
}
