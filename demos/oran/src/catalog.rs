//! The Oran, Algeria bus network: 26 lines and 9 hub stops.
//!
//! Landmark coordinates are approximate; they place lines in the right
//! neighbourhoods, not on real streets.

use tt_core::{Coordinate, LineType, LocalizedText};
use tt_network::{NetworkResult, Route, RouteCatalog, RouteCatalogBuilder, Stop};

/// Map centre used when printing the board header.
pub const ORAN_CENTER: Coordinate = Coordinate::new(35.6971, -0.6308);

// ── Landmarks ─────────────────────────────────────────────────────────────────

mod loc {
    use tt_core::Coordinate;

    pub const MEDINA_JEDIDA: Coordinate = Coordinate::new(35.6918, -0.6416);
    pub const BAHIA_STATION: Coordinate = Coordinate::new(35.6820, -0.6150);
    pub const EL_HASSI:      Coordinate = Coordinate::new(35.6800, -0.6800);
    pub const MISSERGHIN:    Coordinate = Coordinate::new(35.6200, -0.7300);
    pub const BELGAID_UNIV:  Coordinate = Coordinate::new(35.7280, -0.5520);
    pub const BELGAID_RES:   Coordinate = Coordinate::new(35.7350, -0.5400); // 4400/2000 housing
    pub const BIR_EL_DJIR:   Coordinate = Coordinate::new(35.7100, -0.5800);
    pub const HAI_SABAH:     Coordinate = Coordinate::new(35.7050, -0.5750);
    pub const USTO:          Coordinate = Coordinate::new(35.6850, -0.6000);
    pub const ES_SENIA:      Coordinate = Coordinate::new(35.6480, -0.6260);
    pub const HAMRI:         Coordinate = Coordinate::new(35.6900, -0.6350);
    pub const PLACE_1_NOV:   Coordinate = Coordinate::new(35.7020, -0.6480);
    pub const AIN_EL_TURK:   Coordinate = Coordinate::new(35.7420, -0.7530);
    pub const HAI_NEDJMA:    Coordinate = Coordinate::new(35.6550, -0.5900); // Chteibo
    pub const MARAVAL:       Coordinate = Coordinate::new(35.6880, -0.6200);
    pub const GAMBETTA:      Coordinate = Coordinate::new(35.7080, -0.6250);
    pub const AIN_BEIDA:     Coordinate = Coordinate::new(35.6600, -0.6600);
    pub const EL_KERMA:      Coordinate = Coordinate::new(35.6300, -0.6000);
    pub const SIDI_MAAROUF:  Coordinate = Coordinate::new(35.6800, -0.5600);
}

// ── Line colours ──────────────────────────────────────────────────────────────

mod color {
    pub const RED:    &str = "#ef4444";
    pub const BLUE:   &str = "#3b82f6";
    pub const GREEN:  &str = "#10b981";
    pub const PURPLE: &str = "#8b5cf6";
    pub const ORANGE: &str = "#f97316";
    pub const YELLOW: &str = "#eab308";
    pub const TEAL:   &str = "#14b8a6";
    pub const INDIGO: &str = "#6366f1";
    pub const PINK:   &str = "#ec4899";
    pub const CYAN:   &str = "#06b6d4";
    pub const LIME:   &str = "#84cc16";
    pub const AMBER:  &str = "#d97706";
    pub const SLATE:  &str = "#64748b";
    pub const ROSE:   &str = "#be123c";
    pub const VIOLET: &str = "#7c3aed";
}

// ── Builders ──────────────────────────────────────────────────────────────────

fn route(
    id:    &str,
    code:  &str,
    name:  [&str; 3],
    color: &str,
    kind:  LineType,
    path:  &[Coordinate],
) -> Route {
    let [ar, fr, en] = name;
    Route::new(id, code, path.to_vec())
        .with_name(LocalizedText::new(ar, fr, en))
        .with_color(color)
        .with_line_type(kind)
}

fn stop(id: &str, name: [&str; 3], location: Coordinate, routes: &[&str]) -> Stop {
    let [ar, fr, en] = name;
    Stop {
        id:        id.into(),
        name:      LocalizedText::new(ar, fr, en),
        location,
        route_ids: routes.iter().map(|&r| r.into()).collect(),
    }
}

/// All Oran lines, in display order.
pub fn routes() -> Vec<Route> {
    use LineType::{Special, Suburban, Urban};
    let c = Coordinate::new;

    vec![
        // Urban and historical lines
        route("r_11", "11", ["المدينة الجديدة - حي الصباح", "Medina Jedida - Hai Sabah", "Medina Jedida - Hai Sabah"],
              color::RED, Urban, &[loc::PLACE_1_NOV, loc::GAMBETTA, loc::USTO, loc::HAI_SABAH]),
        route("r_8", "8", ["المدينة الجديدة - الحاسي (عدل)", "Medina Jedida - El Hassi", "Medina Jedida - El Hassi"],
              color::BLUE, Urban, &[loc::MEDINA_JEDIDA, loc::BAHIA_STATION, loc::EL_HASSI]),
        route("r_38", "38", ["محطة الباهية - مسرغين", "Gare Bahia - Misserghin", "Bahia Station - Misserghin"],
              color::GREEN, Suburban, &[loc::BAHIA_STATION, c(35.65, -0.68), loc::MISSERGHIN]),
        route("r_103", "103", ["محطة الباهية - جامعة بلقايد", "Gare Bahia - Univ Belgaid", "Bahia Station - Belgaid Univ"],
              color::PURPLE, Suburban, &[loc::BAHIA_STATION, c(35.69, -0.61), loc::BIR_EL_DJIR, loc::BELGAID_UNIV]),
        route("r_G52", "G52", ["المدينة الجديدة - محطة الصباح", "Medina Jedida - Gare Sabah", "Medina Jedida - Sabah Station"],
              color::ORANGE, Urban, &[loc::MEDINA_JEDIDA, loc::BAHIA_STATION, loc::USTO, loc::HAI_SABAH]),
        route("r_14", "14", ["دار الحياة - مرسى الكبير", "Dar El Hayat - Mers El Kebir", "Dar El Hayat - Mers El Kebir"],
              color::CYAN, Suburban, &[loc::PLACE_1_NOV, loc::HAMRI, c(35.72, -0.68)]),
        route("r_39", "39", ["المدينة الجديدة - حي النجمة", "Medina Jedida - Chteibo", "Medina Jedida - Nedjma"],
              color::YELLOW, Suburban, &[loc::MEDINA_JEDIDA, c(35.67, -0.61), loc::HAI_NEDJMA]),
        route("r_S", "S", ["دار الحياة - جامعة بلقايد", "Dar El Hayat - Univ Belgaid", "Dar El Hayat - Belgaid Univ"],
              color::TEAL, Special, &[loc::PLACE_1_NOV, loc::HAMRI, loc::BAHIA_STATION, loc::BELGAID_UNIV]),
        route("r_B", "B", ["حي اللوز - الصديقية", "Hai Ellouz - Seddikia", "Hai Ellouz - Seddikia"],
              color::INDIGO, Urban, &[c(35.67, -0.64), loc::MARAVAL, loc::PLACE_1_NOV, c(35.71, -0.61)]),
        route("r_U", "U", ["السانية - دار الحياة", "Es Senia - Dar El Hayat", "Es Senia - Dar El Hayat"],
              color::PINK, Urban, &[loc::ES_SENIA, loc::MARAVAL, loc::PLACE_1_NOV]),
        // ETO and new poles
        route("r_53", "53", ["بلقايد - المدينة الجديدة", "Belgaid - Medina Jedida", "Belgaid - Medina Jedida"],
              color::LIME, Suburban, &[loc::BELGAID_RES, loc::BIR_EL_DJIR, loc::GAMBETTA, loc::MEDINA_JEDIDA]),
        route("r_54", "54", ["بلقايد (2000) - الحمري", "Belgaid (2000) - Hamri", "Belgaid (2000) - Hamri"],
              color::AMBER, Suburban, &[loc::BELGAID_RES, c(35.71, -0.59), loc::HAMRI]),
        route("r_P", "P", ["ثانوية لطفي - جامعة بلقايد", "Lycée Lotfi - Univ Belgaid", "Lotfi HS - Belgaid Univ"],
              color::VIOLET, Urban, &[c(35.71, -0.63), loc::GAMBETTA, loc::BELGAID_UNIV]),
        route("r_102", "102", ["دار الحياة - حي النور", "Dar El Hayat - Hai Nour", "Dar El Hayat - Hai Nour"],
              color::ROSE, Urban, &[loc::PLACE_1_NOV, loc::HAMRI, loc::USTO, loc::HAI_SABAH]),
        route("r_23", "23 ETO", ["ساحة أول نوفمبر - الباهية", "Place 1 Nov - Bahia", "Place 1 Nov - Bahia"],
              color::SLATE, Urban, &[loc::PLACE_1_NOV, loc::MEDINA_JEDIDA, loc::HAMRI, loc::BAHIA_STATION]),
        route("r_10", "10", ["الحمري - الأندلسيات", "Hamri - Andalouses", "Hamri - Andalouses"],
              color::CYAN, Special, &[loc::HAMRI, loc::PLACE_1_NOV, loc::AIN_EL_TURK]),
        // Suburban and connecting
        route("r_16", "16", ["عين البيضاء - محطة القطار", "Ain Beida - Gare Train", "Ain Beida - Train Station"],
              color::AMBER, Suburban, &[loc::AIN_BEIDA, c(35.68, -0.63), loc::PLACE_1_NOV]),
        route("r_50_52", "50/52", ["حياة ريجنسي - المدينة الجديدة", "Hyatt Regency - M. Jedida", "Hyatt Regency - M. Jedida"],
              color::TEAL, Special, &[c(35.62, -0.58), loc::MEDINA_JEDIDA]),
        route("r_69", "69", ["البرية - الحمري", "El Braya - Hamri", "El Braya - Hamri"],
              color::GREEN, Suburban, &[c(35.60, -0.55), loc::HAI_NEDJMA, loc::HAMRI]),
        route("r_34", "34", ["بلقايد - وسط المدينة", "Belgaid - Centre Ville", "Belgaid - City Center"],
              color::RED, Suburban, &[loc::BELGAID_UNIV, loc::BIR_EL_DJIR, loc::PLACE_1_NOV]),
        route("r_79", "79", ["واد تليلات - المدينة الجديدة", "Oued Tlelat - M. Jedida", "Oued Tlelat - M. Jedida"],
              color::BLUE, Suburban, &[c(35.55, -0.45), loc::EL_KERMA, loc::BAHIA_STATION, loc::MEDINA_JEDIDA]),
        // Special and private lines
        route("r_G1", "G1", ["بلقايد - محطة الباهية", "Belgaid - Gare Bahia", "Belgaid - Bahia Station"],
              color::PURPLE, Special, &[loc::BELGAID_RES, loc::HAI_SABAH, loc::BAHIA_STATION]),
        route("r_H", "H", ["الروشي - كناستال", "Rocher - Canastel", "Rocher - Canastel"],
              color::ORANGE, Urban, &[c(35.69, -0.65), loc::MARAVAL, loc::BAHIA_STATION, c(35.73, -0.59)]),
        route("r_4G", "4G", ["يغمراسن - إيسطو", "Yaghmoracen - USTO", "Yaghmoracen - USTO"],
              color::LIME, Urban, &[c(35.67, -0.66), loc::MEDINA_JEDIDA, loc::USTO]),
        route("r_90", "90", ["حي الصباح - بوفاطيس", "Hai Sabah - Boufatis", "Hai Sabah - Boufatis"],
              color::VIOLET, Suburban, &[loc::HAI_SABAH, loc::SIDI_MAAROUF, c(35.68, -0.50)]),
        route("r_03", "03", ["بلاطو - كارة (السانية)", "Plateau - Kara (Es Senia)", "Plateau - Kara (Es Senia)"],
              color::SLATE, Urban, &[c(35.69, -0.63), loc::HAMRI, loc::ES_SENIA]),
    ]
}

/// Major hubs.
pub fn stops() -> Vec<Stop> {
    vec![
        stop("s_bahia", ["المحطة البرية الباهية", "Gare Routière Bahia", "Bahia Bus Station"], loc::BAHIA_STATION,
             &["r_8", "r_38", "r_103", "r_G52", "r_S", "r_23", "r_G1", "r_H", "r_79"]),
        stop("s_medina", ["المدينة الجديدة", "Medina Jedida", "Medina Jedida"], loc::MEDINA_JEDIDA,
             &["r_11", "r_8", "r_G52", "r_39", "r_23", "r_53", "r_50_52", "r_79", "r_4G"]),
        stop("s_belgaid_u", ["جامعة بلقايد", "Université Belgaid", "Belgaid University"], loc::BELGAID_UNIV,
             &["r_103", "r_S", "r_P", "r_34"]),
        stop("s_belgaid_r", ["بلقايد (4400/2000)", "Belgaid Résidence", "Belgaid Residence"], loc::BELGAID_RES,
             &["r_53", "r_54", "r_G1"]),
        stop("s_usto", ["جامعة إيسطو", "Université USTO", "USTO University"], loc::USTO,
             &["r_11", "r_G52", "r_102", "r_4G"]),
        stop("s_sabah", ["محطة حي الصباح", "Station Hai Sabah", "Hai Sabah Station"], loc::HAI_SABAH,
             &["r_11", "r_G52", "r_102", "r_G1", "r_90"]),
        stop("s_hamri", ["الحمري", "El Hamri", "El Hamri"], loc::HAMRI,
             &["r_14", "r_S", "r_54", "r_102", "r_23", "r_10", "r_69", "r_03"]),
        stop("s_es_senia", ["السانية", "Es Senia", "Es Senia"], loc::ES_SENIA,
             &["r_U", "r_03"]),
        stop("s_place_1", ["ساحة 1 نوفمبر", "Place 1er Novembre", "Place 1st November"], loc::PLACE_1_NOV,
             &["r_11", "r_14", "r_S", "r_B", "r_U", "r_23", "r_10", "r_34"]),
    ]
}

/// Validate and index the built-in network.
pub fn build_catalog() -> NetworkResult<RouteCatalog> {
    RouteCatalogBuilder::new().routes(routes()).stops(stops()).build()
}
