use onsight::models::{Route, RouteId, RouteType};

/// Create a test route; coordinates and the rest take defaults that tests override
#[allow(dead_code)]
pub fn create_test_route(id: i64, name: &str, route_type: &str, grade: &str) -> Route {
    Route {
        id: RouteId::Int(id),
        name: name.to_string(),
        route_type: RouteType::from(route_type),
        grade: grade.to_string(),
        region: "Yosemite".to_string(),
        area: "Valley".to_string(),
        crag: "El Cap".to_string(),
        pitches: 1,
        length_ft: 80.0,
        stars: 3.0,
        review_count: 10,
        lat: None,
        lng: None,
        features: vec![],
        description: None,
    }
}

/// A small, mixed dataset spanning two regions
#[allow(dead_code)]
pub fn sample_routes() -> Vec<Route> {
    let mut routes = Vec::new();

    let mut r = create_test_route(1, "The Nose", "Trad", "5.14a");
    r.crag = "El Cap".to_string();
    r.pitches = 31;
    r.length_ft = 2900.0;
    r.stars = 4.9;
    r.lat = Some(37.7340);
    r.lng = Some(-119.6377);
    routes.push(r);

    let mut r = create_test_route(2, "Midnight Lightning", "Boulder", "V8");
    r.crag = "Camp 4".to_string();
    r.length_ft = 15.0;
    r.stars = 4.7;
    r.lat = Some(37.7420);
    r.lng = Some(-119.6020);
    routes.push(r);

    let mut r = create_test_route(3, "Nutcracker", "Trad", "5.8");
    r.crag = "Manure Pile Buttress".to_string();
    r.pitches = 5;
    r.length_ft = 500.0;
    r.stars = 4.5;
    r.lat = Some(37.7230);
    r.lng = Some(-119.6270);
    routes.push(r);

    let mut r = create_test_route(4, "Bachar Cracker", "Boulder", "V13");
    r.crag = "Camp 4".to_string();
    r.length_ft = 12.0;
    r.stars = 3.0;
    routes.push(r);

    let mut r = create_test_route(5, "Crimson Chrysalis", "Sport", "5.8");
    r.region = "Red Rock".to_string();
    r.area = "Oak Creek".to_string();
    r.crag = "Cloud Tower".to_string();
    r.pitches = 9;
    r.length_ft = 1000.0;
    r.stars = 4.9;
    r.lat = Some(36.0890);
    r.lng = Some(-115.4700);
    routes.push(r);

    let mut r = create_test_route(6, "Fear and Loathing", "Sport", "5.12a");
    r.region = "Red Rock".to_string();
    r.area = "Calico".to_string();
    r.crag = "The Gallery".to_string();
    r.length_ft = 90.0;
    r.stars = 2.9;
    r.lat = Some(36.1580);
    r.lng = Some(-115.4280);
    routes.push(r);

    let mut r = create_test_route(7, "Future Project", "Sport", "5.15a");
    r.region = "Red Rock".to_string();
    r.area = "Calico".to_string();
    r.crag = "The Gallery".to_string();
    r.length_ft = 120.0;
    r.stars = 3.5;
    r.lat = Some(36.1585);
    r.lng = Some(-115.4285);
    routes.push(r);

    let mut r = create_test_route(8, "Ice Line", "Ice", "WI4");
    r.region = "Red Rock".to_string();
    r.area = "Calico".to_string();
    r.crag = "The Gallery".to_string();
    r.length_ft = 300.0;
    r.stars = 3.0;
    routes.push(r);

    routes
}

/// Ids of a result set, in order
#[allow(dead_code)]
pub fn ids(routes: &[&Route]) -> Vec<RouteId> {
    routes.iter().map(|r| r.id.clone()).collect()
}

#[allow(dead_code)]
pub const ROUTES_JSON: &str = r#"[
    {"id": 1, "name": "Serenity Crack", "type": "Trad", "grade": "5.10d",
     "region": "Yosemite", "area": "Valley", "crag": "Royal Arches",
     "pitches": 3, "lengthFt": 350, "stars": 4.8, "reviewCount": 300,
     "lat": 37.7466, "lng": -119.5786},
    {"id": "rr-2", "name": "Crimson Chrysalis", "type": "Sport", "grade": "5.8",
     "region": "Red Rock", "area": "Oak Creek", "crag": "Cloud Tower",
     "pitches": 9, "lengthFt": 1000, "stars": 4.9, "reviewCount": 812,
     "lat": 36.089, "lng": -115.47}
]"#;

#[allow(dead_code)]
pub const HIERARCHY_JSON: &str = r#"{
    "regions": {
        "Yosemite": {"areas": {"Valley": {"crags": ["Royal Arches", "El Cap"]}}},
        "Red Rock": {"areas": {
            "Oak Creek": {"crags": ["Cloud Tower"]},
            "Calico": {"crags": ["The Gallery"]}
        }}
    }
}"#;
