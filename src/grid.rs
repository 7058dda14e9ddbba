// src/grid.rs
//! Итоговая сетка мира и общие операции над координатами

use crate::biome::Terrain;
use image::{ImageBuffer, Luma, Rgba};
use rayon::prelude::*;

/// Смещения до восьми соседей клетки
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Индексы соседей клетки `idx` внутри сетки `rows × columns`
///
/// Соседи за границей сетки просто отбрасываются. Порядок обхода фиксирован
/// (построчный), что важно для воспроизводимости рек.
pub fn neighbours8(rows: usize, columns: usize, idx: usize) -> impl Iterator<Item = usize> {
    let row = (idx / columns) as i32;
    let column = (idx % columns) as i32;
    DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
        let (nr, nc) = (row + dr, column + dc);
        if nr >= 0 && nr < rows as i32 && nc >= 0 && nc < columns as i32 {
            Some((nr as usize) * columns + nc as usize)
        } else {
            None
        }
    })
}

/// Готовый мир: высота и тип местности для каждой клетки
///
/// Создаётся один раз на прогон генерации и после этого не меняется.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub rows: usize,
    pub columns: usize,
    pub elevation: Vec<i32>,
    pub terrain: Vec<Terrain>,
}

impl Grid {
    fn idx(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    #[must_use]
    pub fn elevation_at(&self, row: usize, column: usize) -> i32 {
        self.elevation[self.idx(row, column)]
    }

    #[must_use]
    pub fn terrain_at(&self, row: usize, column: usize) -> Terrain {
        self.terrain[self.idx(row, column)]
    }

    pub fn to_rgba_image(&self) -> Vec<u8> {
        self.terrain
            .iter()
            .flat_map(|&t| {
                let rgb = t.to_rgb();
                [rgb[0], rgb[1], rgb[2], 255] // RGBA
            })
            .collect()
    }

    pub fn to_grayscale_image(&self) -> Vec<u8> {
        self.elevation
            .par_iter()
            .map(|&e| (((e + 256) as f32 / 512.0) * 255.0).clamp(0.0, 255.0) as u8)
            .collect()
    }

    pub fn save_as_png(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_raw(
            self.columns as u32,
            self.rows as u32,
            self.to_rgba_image(),
        )
        .ok_or("Failed to create image buffer")?;
        img.save(path)?;
        Ok(())
    }

    pub fn save_heightmap_png(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let img: ImageBuffer<Luma<u8>, Vec<u8>> = ImageBuffer::from_raw(
            self.columns as u32,
            self.rows as u32,
            self.to_grayscale_image(),
        )
        .ok_or("Failed to create image buffer")?;
        img.save(path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_cell_has_three_neighbours() {
        let n: Vec<usize> = neighbours8(3, 3, 0).collect();
        assert_eq!(n, vec![1, 3, 4]);
    }

    #[test]
    fn center_cell_has_eight_neighbours() {
        let n: Vec<usize> = neighbours8(3, 3, 4).collect();
        assert_eq!(n, vec![0, 1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn edge_cell_has_five_neighbours() {
        // клетка (0,1) в сетке 3×3
        let n: Vec<usize> = neighbours8(3, 3, 1).collect();
        assert_eq!(n, vec![0, 2, 3, 4, 5]);
    }
}
