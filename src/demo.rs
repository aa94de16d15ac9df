//! Demo seed data for the Huancayo pilot (Junín, Perú).
//!
//! Routes, landmarks and catalog items are static seed data: the pilot app
//! ships without a backend, so everything the map and shop screens show
//! comes from here.

use crate::catalog::{BinKind, CatalogItem};
use crate::{GeoPoint, Resident, WasteRoute};

/// Default demo location: Parque Constitución, Huancayo.
pub const DEFAULT_CENTER: GeoPoint = GeoPoint {
    latitude: -12.0681,
    longitude: -75.2106,
};

/// A named landmark used for address autocomplete.
#[derive(Debug, Clone, PartialEq)]
pub struct Landmark {
    pub name: &'static str,
    pub address: &'static str,
    pub location: GeoPoint,
}

const fn point(latitude: f64, longitude: f64) -> GeoPoint {
    GeoPoint {
        latitude,
        longitude,
    }
}

/// Landmarks of Huancayo for the address search box.
pub fn landmarks() -> Vec<Landmark> {
    vec![
        Landmark {
            name: "Parque Constitución",
            address: "Jr. Puno & Calle Real",
            location: point(-12.0681, -75.2106),
        },
        Landmark {
            name: "Plaza Huamanmarca",
            address: "Calle Real & Jr. Piura",
            location: point(-12.0695, -75.2118),
        },
        Landmark {
            name: "Real Plaza Huancayo",
            address: "Av. Gral. Cordova",
            location: point(-12.0635, -75.2075),
        },
        Landmark {
            name: "Estadio Huancayo",
            address: "Av. 9 de Diciembre",
            location: point(-12.0605, -75.2185),
        },
        Landmark {
            name: "Parque de la Identidad Wanka",
            address: "Barrio San Antonio",
            location: point(-12.0535, -75.2015),
        },
        Landmark {
            name: "Mercado Mayorista",
            address: "Av. Ferrocarril",
            location: point(-12.0655, -75.2155),
        },
        Landmark {
            name: "Universidad Nacional del Centro (UNCP)",
            address: "Av. Mariscal Castilla 3909",
            location: point(-12.0435, -75.2285),
        },
        Landmark {
            name: "UPLA - Chorrillos",
            address: "Av. Giráldez",
            location: point(-12.0505, -75.1850),
        },
        Landmark {
            name: "Cerrito de la Libertad",
            address: "Cerrito de la Libertad",
            location: point(-12.0585, -75.1955),
        },
        Landmark {
            name: "Terminal Terrestre Huancayo",
            address: "Av. Evitamiento",
            location: point(-12.0525, -75.2205),
        },
        Landmark {
            name: "Hospital Carrión",
            address: "Av. Daniel Alcides Carrión",
            location: point(-12.0615, -75.2165),
        },
        Landmark {
            name: "Comisaría de Huancayo",
            address: "Calle Real",
            location: point(-12.0675, -75.2095),
        },
        Landmark {
            name: "Open Plaza Huancayo",
            address: "Av. Ferrocarril",
            location: point(-12.0725, -75.2145),
        },
        Landmark {
            name: "Parque Tupac Amaru",
            address: "San Carlos",
            location: point(-12.0620, -75.2020),
        },
        Landmark {
            name: "Colegio Salesiano",
            address: "San Carlos",
            location: point(-12.0650, -75.2060),
        },
        Landmark {
            name: "Municipalidad de El Tambo",
            address: "Av. Mariscal Castilla",
            location: point(-12.0550, -75.2150),
        },
        Landmark {
            name: "Justicia Paz y Vida",
            address: "El Tambo Sector Norte",
            location: point(-12.0305, -75.2250),
        },
        Landmark {
            name: "Parque de los Sombreros",
            address: "El Tambo",
            location: point(-12.0510, -75.2120),
        },
        Landmark {
            name: "Parque Peñaloza",
            address: "Chilca",
            location: point(-12.0790, -75.2160),
        },
    ]
}

fn route(id: &str, name: &str, description: &str, path: Vec<GeoPoint>) -> WasteRoute {
    WasteRoute {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        path,
    }
}

/// The seven Huancayo collection routes.
pub fn huancayo_routes() -> Vec<WasteRoute> {
    vec![
        // Ruta 1: east -> center
        route(
            "r1",
            "Ruta 1: Palián - San Carlos",
            "UPLA, San Carlos, Colegio Salesiano",
            vec![
                point(-12.0505, -75.1850), // Palián (UPLA)
                point(-12.0540, -75.1900), // Cooperativa Santa Isabel
                point(-12.0580, -75.1960), // San Carlos
                point(-12.0620, -75.2020), // Parque Tupac
                point(-12.0650, -75.2060), // Colegio Salesiano
                point(-12.0681, -75.2106), // Centro
            ],
        ),
        // Ruta 2: north -> center, main axis
        route(
            "r2",
            "Ruta 2: El Tambo - UNCP",
            "Av. Mariscal Castilla, Parque Bolognesi",
            vec![
                point(-12.0420, -75.2250),
                point(-12.0480, -75.2200),
                point(-12.0520, -75.2180),
                point(-12.0550, -75.2150),
                point(-12.0600, -75.2120),
                point(-12.0681, -75.2106),
            ],
        ),
        // Ruta 3: south -> center, main axis
        route(
            "r3",
            "Ruta 3: Chilca - Calle Real",
            "Av. 9 de Diciembre, Calle Real Sur",
            vec![
                point(-12.0900, -75.2200),
                point(-12.0850, -75.2180),
                point(-12.0780, -75.2150),
                point(-12.0720, -75.2120),
                point(-12.0681, -75.2106),
            ],
        ),
        route(
            "r4",
            "Ruta 4: Ocopilla - Estadio",
            "Zona Este de Chilca, Próceres",
            vec![
                point(-12.0800, -75.2050),
                point(-12.0750, -75.2080),
                point(-12.0700, -75.2100),
                point(-12.0681, -75.2106),
            ],
        ),
        route(
            "r5",
            "Ruta 5: Justicia Paz y Vida",
            "El Tambo Norte, Evitamiento",
            vec![
                point(-12.0250, -75.2300),
                point(-12.0350, -75.2250),
                point(-12.0450, -75.2200),
                point(-12.0550, -75.2150),
            ],
        ),
        route(
            "r6",
            "Ruta 6: San Antonio - Pio Pata",
            "Parque Identidad, Open Plaza",
            vec![
                point(-12.0450, -75.2100),
                point(-12.0500, -75.2080),
                point(-12.0550, -75.2050),
                point(-12.0600, -75.2080),
                point(-12.0650, -75.2100),
            ],
        ),
        route(
            "r7",
            "Ruta 7: Azapampa - Auquimarca",
            "Zona Sur Profundo",
            vec![
                point(-12.1050, -75.2250),
                point(-12.0950, -75.2220),
                point(-12.0900, -75.2200),
            ],
        ),
    ]
}

/// A demo resident living at the default center, assigned to `route_id`,
/// with default notification settings.
pub fn demo_resident(route_id: &str) -> Resident {
    Resident {
        id: "u-demo".to_string(),
        name: "Usuario Huancayo".to_string(),
        phone_number: "987654321".to_string(),
        route_id: route_id.to_string(),
        home: DEFAULT_CENTER,
        address: "Huancayo (demo location)".to_string(),
        settings: Default::default(),
    }
}

/// A stopped demo truck seeded at the first waypoint of `route_id`.
/// Panics if the id is not one of the demo routes; demo data is trusted.
pub fn demo_truck(route_id: &str) -> crate::Truck {
    let routes = huancayo_routes();
    let route = routes
        .iter()
        .find(|r| r.id == route_id)
        .expect("demo route id");
    crate::Truck {
        id: "t-sim".to_string(),
        route_id: route.id.clone(),
        driver_name: "Assigned driver".to_string(),
        location: route.path[0],
        is_moving: false,
        last_update_ms: 0,
    }
}

/// The three seeded EcoTachos catalog items.
pub fn catalog_items() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            id: "t1".to_string(),
            name: "Tacho Domiciliario con Ruedas".to_string(),
            kind: BinKind::Household,
            capacity_liters: 120,
            suggested_households: "3–5 viviendas".to_string(),
            price_min: 100,
            price_max: 120,
            currency: "PEN".to_string(),
            description: "Tacho plástico gris con ruedas, ideal para pequeñas cuadras o pasajes. \
                          Resistente, fácil de mover y adecuado para residuos diarios."
                .to_string(),
            benefits: vec![
                "Fácil transporte".to_string(),
                "Tapa hermética anti-olores".to_string(),
                "Material reciclado".to_string(),
            ],
            active: true,
            image_url: Some(
                "https://promart.vteximg.com.br/arquivos/ids/703444-1000-1000/image-b0b2e3e5c9b74052968843c088926217.jpg"
                    .to_string(),
            ),
        },
        CatalogItem {
            id: "t2".to_string(),
            name: "Contenedor Comunitario Móvil".to_string(),
            kind: BinKind::Communal,
            capacity_liters: 660,
            suggested_households: "20–30 viviendas".to_string(),
            price_min: 200,
            price_max: 280,
            currency: "PEN".to_string(),
            description: "Contenedor comunitario de alta capacidad con 4 ruedas para colocarse en \
                          esquinas estratégicas. Reduce la cantidad de bolsas dispersas."
                .to_string(),
            benefits: vec![
                "Alta visibilidad".to_string(),
                "4 Ruedas reforzadas".to_string(),
                "Tapa plana".to_string(),
            ],
            active: true,
            image_url: Some(
                "https://contenedoresdebasura.com.mx/wp-content/uploads/2019/04/CONTENEDOR-660-LITROS-GRIS.jpg"
                    .to_string(),
            ),
        },
        CatalogItem {
            id: "t3".to_string(),
            name: "Punto Verde Modular (Set de 3)".to_string(),
            kind: BinKind::RecyclingPoint,
            capacity_liters: 360, // 120 L x 3
            suggested_households: "Condominios o Parques".to_string(),
            price_min: 500,
            price_max: 600,
            currency: "PEN".to_string(),
            description: "Estación de reciclaje completa. Conjunto de tres contenedores \
                          identificados por color para separación de residuos: Orgánicos, \
                          Reciclables y No Aprovechables."
                .to_string(),
            benefits: vec![
                "Fomenta el reciclaje".to_string(),
                "Colores normados".to_string(),
                "Estructura sólida".to_string(),
            ],
            active: true,
            image_url: Some(
                "https://acdn.mitiendanube.com/stores/968/562/products/estacion-ambiental-3-cestos1-0072d62757279316d815949168128384-640-0.jpg"
                    .to_string(),
            ),
        },
    ]
}
