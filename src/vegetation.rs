// src/vegetation.rs
//! Озеленение берегов: почва рядом с реками зарастает лесом

use crate::biome::Terrain;
use crate::grid::neighbours8;

/// Превращает почву вблизи рек в лес
///
/// От всех речных клеток разом расширяется фронт по восьми соседям, `radius`
/// шагов. Всё достигнутое — это объединение окрестностей каждой речной
/// клетки; попавшая в него почва становится лесом. Остальные типы местности
/// не трогаются, так что лес никогда не понижается обратно.
pub fn paint_forests(terrain: &mut [Terrain], rows: usize, columns: usize, radius: usize) {
    let mut reached = vec![false; terrain.len()];
    let mut frontier: Vec<usize> = (0..terrain.len())
        .filter(|&idx| terrain[idx] == Terrain::River)
        .collect();
    for &idx in &frontier {
        reached[idx] = true;
    }

    for _ in 0..radius {
        let mut next = Vec::new();
        for &idx in &frontier {
            for neighbour in neighbours8(rows, columns, idx) {
                if !reached[neighbour] {
                    reached[neighbour] = true;
                    next.push(neighbour);
                }
            }
        }
        frontier = next;
    }

    for (idx, cell) in terrain.iter_mut().enumerate() {
        if reached[idx] && *cell == Terrain::Soil {
            *cell = Terrain::Forest;
        }
    }
}
