//! Static Huaraz catalogs. Iteration order is observable through the
//! first-match lookups in `queries`, so entries must stay in this order.

use super::types::{
    Accommodation, Activity, Attraction, BudgetTier, Difficulty, SeasonRecommendation,
};

const DRY_SEASON: &[&str] = &["mayo", "junio", "julio", "agosto", "septiembre"];
const ALL_YEAR: &[&str] = &["todo el año"];

pub static ATTRACTIONS: [Attraction; 5] = [
    Attraction {
        key: "laguna_paron",
        name: "Laguna Parón",
        description: "Laguna alpina de agua turquesa ubicada en la Cordillera Blanca con vistas espectaculares al Nevado Piramide.",
        location: "Pariac, Huaraz",
        altitude: 4185,
        difficulty: Difficulty::Medium,
        duration: "8-10 horas",
        best_season: DRY_SEASON,
        essentials: &[
            "protector solar",
            "bloqueador labial",
            "gafas de sol",
            "agua",
            "snacks",
            "chaqueta",
        ],
        estimated_cost: "S/. 50-100 por persona (entrada + transporte)",
        contact_info: None,
    },
    Attraction {
        key: "laguna_69",
        name: "Laguna 69",
        description: "Laguna de color azul verdoso rodeada de montañas nevadas. Una de las más visitadas de Huaraz.",
        location: "Quisma, Carhuaz",
        altitude: 4600,
        difficulty: Difficulty::Medium,
        duration: "6-8 horas",
        best_season: DRY_SEASON,
        essentials: &[
            "agua abundante",
            "snacks energéticos",
            "protector solar",
            "chaqueta",
            "zapatos deportivos",
        ],
        estimated_cost: "S/. 80-150 por persona",
        contact_info: None,
    },
    Attraction {
        key: "nevado_pastoruri",
        name: "Nevado Pastoruri",
        description: "Glaciar accesible con vistas panorámicas. Ideal para quienes quieren experimentar nieve sin alpinismo técnico.",
        location: "Ticapampa",
        altitude: 5240,
        difficulty: Difficulty::MediumHigh,
        duration: "10-12 horas",
        best_season: &["mayo", "junio", "julio", "agosto"],
        essentials: &[
            "ropa térmica",
            "protector solar fuerte",
            "bloqueador labial",
            "agua",
            "snacks",
            "gafas de sol oscuras",
        ],
        estimated_cost: "S/. 100-200 por persona",
        contact_info: None,
    },
    Attraction {
        key: "laguna_llanganuco",
        name: "Laguna Llanganuco",
        description: "Dos lagunas conectadas (Orcon y Ngorongoro) con impresionantes vistas de nevados.",
        location: "Yungay",
        altitude: 3850,
        difficulty: Difficulty::Low,
        duration: "6 horas",
        best_season: ALL_YEAR,
        essentials: &["agua", "snacks", "protector solar", "chaqueta", "cámara"],
        estimated_cost: "S/. 50-80 por persona",
        contact_info: None,
    },
    Attraction {
        key: "chavin_de_huantar",
        name: "Chavín de Huántar",
        description: "Sitio arqueológico importante de la cultura Chavín con túneles subterráneos y plazas ceremoniales.",
        location: "Chavín de Huántar",
        altitude: 3180,
        difficulty: Difficulty::Low,
        duration: "4-5 horas",
        best_season: ALL_YEAR,
        essentials: &["cámara", "agua", "linterna o frontal"],
        estimated_cost: "S/. 30-50 entrada + transporte",
        contact_info: None,
    },
];

pub static ACTIVITIES: [Activity; 4] = [
    Activity {
        key: "trekking_cordillera",
        name: "Trekking en Cordillera Blanca",
        types: &[
            "Santa Cruz Trek (4-5 días)",
            "Alpamayo Trek (7 días)",
            "Inca Trail alternativo",
        ],
        difficulty: Difficulty::MediumHigh,
        best_for: "aventureros con experiencia",
        cost: "S/. 1500-3000 por persona",
    },
    Activity {
        key: "mountain_biking",
        name: "Mountain Biking",
        types: &["Circuito Valle de Huaraz", "Downhill desde Laguna Parón"],
        difficulty: Difficulty::Medium,
        best_for: "ciclistas experimentados",
        cost: "S/. 150-300 por día",
    },
    Activity {
        key: "rock_climbing",
        name: "Escalada en Roca",
        types: &["Crags cercanos", "Grandes paredes"],
        difficulty: Difficulty::Variable,
        best_for: "escaladores",
        cost: "S/. 300-500 por día con guía",
    },
    Activity {
        key: "cultural_tours",
        name: "Tours Culturales",
        types: &[
            "Mercado tradicional",
            "Pueblos indígenas",
            "Artesanías locales",
        ],
        difficulty: Difficulty::Low,
        best_for: "todos",
        cost: "S/. 50-150 por persona",
    },
];

pub static ACCOMMODATIONS: [(BudgetTier, &[Accommodation]); 3] = [
    (
        BudgetTier::Budget,
        &[
            Accommodation {
                name: "Casa de Nuestros Amigos",
                price: "S/. 30-50 noche",
                location: "Centro",
            },
            Accommodation {
                name: "Albergue Perla de Los Andes",
                price: "S/. 40-60 noche",
                location: "Jr. Comercio",
            },
            Accommodation {
                name: "Hostel Churup",
                price: "S/. 35-55 noche",
                location: "Jirón Fitzcarrald",
            },
        ],
    ),
    (
        BudgetTier::MidRange,
        &[
            Accommodation {
                name: "Hotel Huaraz",
                price: "S/. 100-150 noche",
                location: "Plaza de Armas",
            },
            Accommodation {
                name: "Hotel Andino",
                price: "S/. 80-120 noche",
                location: "Centro",
            },
            Accommodation {
                name: "Dreamers Hostel",
                price: "S/. 90-130 noche",
                location: "Jr. Comercio",
            },
        ],
    ),
    (
        BudgetTier::Luxury,
        &[
            Accommodation {
                name: "Gran Hotel Huaraz",
                price: "S/. 200-300 noche",
                location: "Plaza de Armas",
            },
            Accommodation {
                name: "Hotel El Tejada",
                price: "S/. 180-250 noche",
                location: "Centro",
            },
        ],
    ),
];

pub static SEASONS: [SeasonRecommendation; 4] = [
    SeasonRecommendation {
        style: "trekking",
        best_months: &["mayo", "junio", "julio", "agosto"],
        reason: "Cielo claro y poco riesgo de lluvia",
        considerations: "Frío intenso, especialmente por las noches",
    },
    SeasonRecommendation {
        style: "casual",
        best_months: DRY_SEASON,
        reason: "Clima estable y buena visibilidad",
        considerations: "Evitar noviembre a marzo por lluvia",
    },
    SeasonRecommendation {
        style: "photography",
        best_months: &["mayo", "junio", "julio", "agosto"],
        reason: "Máxima claridad atmosférica y cielo azul",
        considerations: "Temperaturas bajas, llevar protección",
    },
    SeasonRecommendation {
        style: "cultural",
        best_months: ALL_YEAR,
        reason: "Las festividades ocurren durante el año",
        considerations: "Verificar fechas de festivales locales",
    },
];
