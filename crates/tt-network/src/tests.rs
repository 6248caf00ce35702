//! Unit tests for tt-network.

use tt_core::{Coordinate, LineType, LocalizedText, RouteId, StopId};

use crate::{Route, RouteCatalog, RouteCatalogBuilder, Stop};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn c(lat: f64, lng: f64) -> Coordinate {
    Coordinate::new(lat, lng)
}

fn route(id: &str, code: &str, en: &str) -> Route {
    Route::new(id, code, vec![c(35.70, -0.64), c(35.69, -0.62)])
        .with_name(LocalizedText::new(format!("ar {en}"), format!("fr {en}"), en))
}

fn stop(id: &str, lat: f64, lng: f64, routes: &[&str]) -> Stop {
    Stop {
        id:        StopId::from(id),
        name:      LocalizedText::new(id, id, id),
        location:  c(lat, lng),
        route_ids: routes.iter().copied().map(RouteId::from).collect(),
    }
}

/// Three routes, three stops: `s_a` serves r_1 and r_2, `s_b` serves r_2,
/// `s_c` serves r_3.
fn small_catalog() -> RouteCatalog {
    RouteCatalogBuilder::new()
        .add_route(route("r_1", "11", "Medina Jedida - Hai Sabah"))
        .add_route(route("r_2", "G52", "Medina Jedida - Sabah Station").with_line_type(LineType::Special))
        .add_route(route("r_3", "U", "Es Senia - Dar El Hayat"))
        .add_stop(stop("s_a", 35.6918, -0.6416, &["r_1", "r_2"]))
        .add_stop(stop("s_b", 35.6820, -0.6150, &["r_2"]))
        .add_stop(stop("s_c", 35.6480, -0.6260, &["r_3"]))
        .build()
        .unwrap()
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::NetworkError;

    #[test]
    fn builds_in_insertion_order() {
        let cat = small_catalog();
        let ids: Vec<_> = cat.routes().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["r_1", "r_2", "r_3"]);
        assert_eq!(cat.stop_count(), 3);
    }

    #[test]
    fn empty_path_rejected() {
        let result = RouteCatalogBuilder::new()
            .add_route(Route::new("r_x", "X", vec![]))
            .build();
        assert!(matches!(result, Err(NetworkError::EmptyPath(id)) if id.as_str() == "r_x"));
    }

    #[test]
    fn single_vertex_path_accepted() {
        let cat = RouteCatalogBuilder::new()
            .add_route(Route::new("r_x", "X", vec![c(10.0, 10.0)]))
            .build()
            .unwrap();
        assert_eq!(cat.route("r_x").unwrap().path.len(), 1);
    }

    #[test]
    fn duplicate_route_rejected() {
        let result = RouteCatalogBuilder::new()
            .add_route(route("r_1", "1", "a"))
            .add_route(route("r_1", "1b", "b"))
            .build();
        assert!(matches!(result, Err(NetworkError::DuplicateRoute(_))));
    }

    #[test]
    fn duplicate_stop_rejected() {
        let result = RouteCatalogBuilder::new()
            .add_route(route("r_1", "1", "a"))
            .add_stop(stop("s_a", 0.0, 0.0, &["r_1"]))
            .add_stop(stop("s_a", 1.0, 1.0, &["r_1"]))
            .build();
        assert!(matches!(result, Err(NetworkError::DuplicateStop(_))));
    }

    #[test]
    fn stop_with_unknown_route_rejected() {
        let result = RouteCatalogBuilder::new()
            .add_route(route("r_1", "1", "a"))
            .add_stop(stop("s_a", 0.0, 0.0, &["r_1", "r_missing"]))
            .build();
        match result {
            Err(NetworkError::UnknownRoute { stop, route }) => {
                assert_eq!(stop.as_str(), "s_a");
                assert_eq!(route.as_str(), "r_missing");
            }
            other => panic!("expected UnknownRoute, got {:?}", other.err()),
        }
    }

    #[test]
    fn empty_catalog() {
        let cat = RouteCatalog::empty();
        assert!(cat.is_empty());
        assert!(cat.nearest_stop(c(0.0, 0.0)).is_none());
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod query_tests {
    use super::*;

    #[test]
    fn route_lookup() {
        let cat = small_catalog();
        assert_eq!(cat.route("r_2").unwrap().code, "G52");
        assert!(cat.route("r_missing").is_none());
    }

    #[test]
    fn stops_for_route_in_catalog_order() {
        let cat = small_catalog();
        let r2 = RouteId::from("r_2");
        let ids: Vec<_> = cat.stops_for_route(&r2).map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["s_a", "s_b"]);
    }

    #[test]
    fn nearest_stop_snaps() {
        let cat = small_catalog();
        let near_b = c(35.6825, -0.6155);
        assert_eq!(cat.nearest_stop(near_b).unwrap().id.as_str(), "s_b");
        let near_c = c(35.6400, -0.6300);
        assert_eq!(cat.nearest_stop(near_c).unwrap().id.as_str(), "s_c");
    }
}

// ── Search ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod search_tests {
    use super::*;
    use tt_core::Language;

    fn codes(routes: Vec<&Route>) -> Vec<&str> {
        routes.into_iter().map(|r| r.code.as_str()).collect()
    }

    #[test]
    fn empty_query_returns_all() {
        let cat = small_catalog();
        assert_eq!(cat.search("", Language::En).len(), 3);
    }

    #[test]
    fn matches_code_case_insensitively() {
        let cat = small_catalog();
        assert_eq!(codes(cat.search("g5", Language::En)), ["G52"]);
        assert_eq!(codes(cat.search("u", Language::Ar)), ["U"]);
    }

    #[test]
    fn matches_name_in_active_language_only() {
        let cat = small_catalog();
        assert_eq!(codes(cat.search("medina", Language::En)), ["11", "G52"]);
        // Only the French names carry the "fr " prefix.
        assert_eq!(codes(cat.search("fr es senia", Language::Fr)), ["U"]);
        assert!(cat.search("fr es senia", Language::En).is_empty());
    }

    #[test]
    fn no_match() {
        let cat = small_catalog();
        assert!(cat.search("zzz", Language::En).is_empty());
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use crate::{NetworkError, load_catalog_dir, load_catalog_readers};
    use tt_core::{Language, LineType};

    const ROUTES: &str = "\
route_id,code,name_ar,name_fr,name_en,color,line_type\n\
r_11,11,المدينة الجديدة - حي الصباح,Medina Jedida - Hai Sabah,Medina Jedida - Hai Sabah,#ef4444,URBAN\n\
r_38,38,محطة الباهية - مسرغين,Gare Bahia - Misserghin,Bahia Station - Misserghin,#10b981,SUBURBAN\n\
";

    // Deliberately out of seq order for r_11.
    const POINTS: &str = "\
route_id,seq,lat,lng\n\
r_11,1,35.7080,-0.6250\n\
r_11,0,35.7020,-0.6480\n\
r_38,0,35.6820,-0.6150\n\
r_11,2,35.6850,-0.6000\n\
";

    const STOPS: &str = "\
stop_id,name_ar,name_fr,name_en,lat,lng,route_ids\n\
s_usto,جامعة إيسطو,Université USTO,USTO University,35.6850,-0.6000,r_11\n\
s_bahia,المحطة البرية الباهية,Gare Routière Bahia,Bahia Bus Station,35.6820,-0.6150,r_11; r_38\n\
";

    #[test]
    fn loads_routes_points_and_stops() {
        let cat = load_catalog_readers(Cursor::new(ROUTES), Cursor::new(POINTS), Cursor::new(STOPS)).unwrap();
        assert_eq!(cat.route_count(), 2);

        let r11 = cat.route("r_11").unwrap();
        assert_eq!(r11.path.len(), 3);
        assert_eq!(r11.path[0].lat, 35.7020); // sorted by seq
        assert_eq!(r11.path[2].lng, -0.6000);
        assert_eq!(&r11.name[Language::Fr], "Medina Jedida - Hai Sabah");
        assert_eq!(r11.color, "#ef4444");

        assert_eq!(cat.route("r_38").unwrap().line_type, LineType::Suburban);

        let bahia = &cat.stops()[1];
        assert_eq!(bahia.route_ids.len(), 2);
        assert_eq!(bahia.route_ids[1].as_str(), "r_38");
    }

    #[test]
    fn route_without_points_is_empty_path_error() {
        let points = "route_id,seq,lat,lng\nr_11,0,35.70,-0.64\n";
        let result = load_catalog_readers(Cursor::new(ROUTES), Cursor::new(points), Cursor::new(STOPS));
        assert!(matches!(result, Err(NetworkError::EmptyPath(_))));
    }

    #[test]
    fn orphan_points_rejected() {
        let points = format!("{POINTS}r_99,0,1.0,1.0\n");
        let result = load_catalog_readers(Cursor::new(ROUTES), Cursor::new(points), Cursor::new(STOPS));
        assert!(matches!(result, Err(NetworkError::Parse(_))));
    }

    #[test]
    fn bad_line_type_rejected() {
        let routes = "route_id,code,name_ar,name_fr,name_en,color,line_type\nr_11,11,a,b,c,#fff,TRAM\n";
        let result = load_catalog_readers(Cursor::new(routes), Cursor::new(POINTS), Cursor::new(""));
        assert!(result.is_err());
    }

    #[test]
    fn malformed_number_rejected() {
        let points = "route_id,seq,lat,lng\nr_11,0,north,-0.64\n";
        let result = load_catalog_readers(Cursor::new(ROUTES), Cursor::new(points), Cursor::new(STOPS));
        assert!(matches!(result, Err(NetworkError::Csv(_))));
    }

    #[test]
    fn repeated_route_row_is_duplicate_route() {
        let routes = format!("{ROUTES}r_11,11b,a,b,c,#000000,URBAN\n");
        let result = load_catalog_readers(Cursor::new(routes), Cursor::new(POINTS), Cursor::new(STOPS));
        assert!(matches!(result, Err(NetworkError::DuplicateRoute(ref id)) if id.as_str() == "r_11"));
    }

    #[test]
    fn missing_dir_is_io_error() {
        let result = load_catalog_dir(std::path::Path::new("/nonexistent/catalog"));
        assert!(matches!(result, Err(NetworkError::Io(_))));
    }
}
