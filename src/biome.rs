// src/biome.rs
use crate::config::GenerationParams;
use crate::heightfield::HeightField;
use serde::{Deserialize, Serialize};

/// Тип местности клетки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Terrain {
    Sea,
    Beach,
    Soil,
    Forest,
    Snow,
    River,
}

impl Terrain {
    #[must_use]
    pub fn to_rgb(&self) -> [u8; 3] {
        match self {
            Terrain::Sea => [0, 64, 128],
            Terrain::Beach => [220, 200, 140],
            Terrain::Soil => [150, 180, 90],
            Terrain::Forest => [60, 120, 60],
            Terrain::Snow => [235, 240, 250],
            Terrain::River => [70, 130, 200],
        }
    }
}

/// Назначает тип местности каждой клетке по её высоте
///
/// Клетки, уже помеченные реками, не переназначаются. Остальные проходят
/// правила в фиксированном порядке приоритета: море → пляж → лес → снег →
/// земля. Диапазоны могут пересекаться численно, неоднозначность разрешает
/// именно порядок, а не величина высоты.
pub fn classify(
    field: &HeightField,
    river_marks: &[Option<Terrain>],
    params: &GenerationParams,
) -> Vec<Terrain> {
    field
        .data
        .iter()
        .zip(river_marks)
        .map(|(&elevation, &mark)| {
            if let Some(terrain) = mark {
                return terrain;
            }
            if elevation <= params.sea_level {
                Terrain::Sea
            } else if elevation < params.sea_level + 10 {
                Terrain::Beach
            } else if elevation > params.tree_level_start && elevation < params.tree_level_end {
                Terrain::Forest
            } else if elevation > params.snow_level {
                Terrain::Snow
            } else {
                Terrain::Soil
            }
        })
        .collect()
}
