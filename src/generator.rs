// src/generator.rs
//! Оркестратор генерации: от конфигурации до готовой сетки
//!
//! Конвейер фиксированный: синтез высот → контроль качества по числу вершин →
//! реки → биомы по высоте → озеленение берегов. Контроль качества ограничен
//! лимитом попыток: рельеф без нужного числа заснеженных вершин
//! перегенерируется, но не бесконечно.

use crate::biome::{Terrain, classify};
use crate::config::GenerationParams;
use crate::error::GenerationError;
use crate::grid::Grid;
use crate::heightfield::{HeightField, synthesize};
use crate::rivers::generate_rivers;
use crate::summits::find_summits;
use crate::vegetation::paint_forests;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Генерирует полностью классифицированный мир
///
/// Либо возвращает сетку, где у каждой клетки есть высота и ровно один тип
/// местности, либо ошибку. Частичных результатов не бывает. Одинаковые
/// параметры дают побайтово одинаковые сетки.
pub fn generate_world(params: &GenerationParams) -> Result<Grid, GenerationError> {
    params.validate()?;

    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);

    // Контроль качества: принимаем первый рельеф с достаточным числом вершин
    let mut field: Option<HeightField> = None;
    for _ in 0..params.max_attempts {
        let candidate = synthesize(params.rows, params.columns, &mut rng);
        if find_summits(&candidate, params.snow_level).len() >= params.min_summits {
            field = Some(candidate);
            break;
        }
    }
    let Some(field) = field else {
        return Err(GenerationError::InsufficientSummits {
            attempts: params.max_attempts,
            required: params.min_summits,
        });
    };

    let mut river_marks: Vec<Option<Terrain>> = vec![None; params.rows * params.columns];
    generate_rivers(
        &field,
        &mut river_marks,
        params.sea_level,
        params.snow_level,
        params.max_rivers,
        &mut rng,
    );

    let mut terrain = classify(&field, &river_marks, params);
    paint_forests(
        &mut terrain,
        params.rows,
        params.columns,
        params.vegetation_radius,
    );

    Ok(Grid {
        rows: params.rows,
        columns: params.columns,
        elevation: field.data,
        terrain,
    })
}
