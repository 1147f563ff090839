//! JSON fixtures shaped like the analytics export.

use serde_json::{json, Value};

/// Scenario records: a fresh bargain, an aged deep bargain, a stale premium
/// with every leverage factor, and a listing without comparables.
pub fn analytics_batch() -> Value {
    json!([
        {
            "id": 101,
            "precio": 150000,
            "diferencia_pct": -15.0,
            "categoria": "oportunidad",
            "dias_en_mercado": 40
        },
        {
            "id": 102,
            "precio": 120000,
            "diferencia_pct": -25.0,
            "categoria": "oportunidad",
            "dias_en_mercado": 110
        },
        {
            "id": "103",
            "precio": 210000,
            "diferencia_pct": 8.0,
            "categoria": "sobre_promedio",
            "dias_en_mercado": 130,
            "posicion_en_tipologia": 2,
            "unidades_misma_tipologia": 3,
            "unidades_en_edificio": 6,
            "estado_construccion": "entrega_inmediata"
        },
        {
            "id": 104,
            "categoria": "promedio",
            "dias_en_mercado": 10
        }
    ])
}

/// CMA input with comparable aggregates around 200k.
pub fn cma_input() -> Value {
    json!({
        "aggregates": {
            "precio_promedio": 200000,
            "precio_mediana": 195000,
            "precio_min": 160000,
            "precio_max": 240000,
            "dias_promedio": 90
        },
        "precio": 205000,
        "categoria": "promedio",
        "diferencia_pct": 2.5,
        "ventajas": 1,
        "desventajas": 0
    })
}

/// Map listings in ranked order, prices 100k..=500k.
pub fn map_listings() -> Value {
    json!([
        { "id": 1, "precio": 100000, "diferencia_pct": -18.0, "dias_en_mercado": 20 },
        { "id": 2, "precio": 200000, "diferencia_pct": 0.0, "dias_en_mercado": 20 },
        { "id": 3, "precio": 300000, "diferencia_pct": 12.0, "dias_en_mercado": 20 },
        { "id": 4, "precio": 400000, "diferencia_pct": null, "dias_en_mercado": 20 },
        { "id": 5, "precio": 500000, "diferencia_pct": -11.0, "dias_en_mercado": 20 }
    ])
}
