// src/summits.rs
//! Поиск горных вершин: локальных максимумов карты высот

use crate::grid::neighbours8;
use crate::heightfield::HeightField;

/// Локальный максимум: клетка не ниже всех соседей внутри сетки
///
/// Соседи за границей не участвуют в сравнении. Равенство допускается,
/// поэтому плато тоже считается вершиной.
#[must_use]
pub fn is_local_max(field: &HeightField, row: usize, column: usize) -> bool {
    let idx = row * field.columns + column;
    let elevation = field.data[idx];
    neighbours8(field.rows, field.columns, idx).all(|n| field.data[n] <= elevation)
}

/// Все вершины не ниже уровня снега, в построчном порядке
#[must_use]
pub fn find_summits(field: &HeightField, snow_level: i32) -> Vec<(usize, usize)> {
    let mut summits = Vec::new();
    for row in 0..field.rows {
        for column in 0..field.columns {
            if field.get(row, column) >= snow_level && is_local_max(field, row, column) {
                summits.push((row, column));
            }
        }
    }
    summits
}
