// src/config.rs
//! Конфигурация генерации мира
//!
//! Этот модуль определяет все параметры, управляющие процедурной генерацией:
//! - Размеры сетки
//! - Пороги высот для биомов (море, пляж, лес, снег)
//! - Количество рек и радиус озеленения вокруг них
//! - Сид генератора случайных чисел
//!
//! Все структуры поддерживают сериализацию в TOML для удобной настройки через
//! конфигурационные файлы. Перед генерацией параметры проходят валидацию:
//! несогласованные пороги отклоняются до выделения сетки.

use crate::error::GenerationError;
use serde::{Deserialize, Serialize};
use std::fs;

/// Основные параметры генерации мира
///
/// Полная конфигурация для генерации одного мира. Поддерживает загрузку из TOML-файлов.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Сид генератора случайных чисел (детерминированная генерация)
    pub seed: u64,

    /// Количество строк сетки (по умолчанию 100)
    #[serde(default = "default_rows")]
    pub rows: usize,

    /// Количество столбцов сетки (по умолчанию 100)
    #[serde(default = "default_columns")]
    pub columns: usize,

    /// Уровень моря: всё, что не выше него, становится морем (по умолчанию -64)
    #[serde(default = "default_sea_level")]
    pub sea_level: i32,

    /// Нижняя граница лесного пояса (по умолчанию 32)
    #[serde(default = "default_tree_level_start")]
    pub tree_level_start: i32,

    /// Верхняя граница лесного пояса (по умолчанию 156)
    #[serde(default = "default_tree_level_end")]
    pub tree_level_end: i32,

    /// Уровень снега: вершины не ниже него считаются заснеженными (по умолчанию 192)
    #[serde(default = "default_snow_level")]
    pub snow_level: i32,

    /// Максимальное количество рек (по умолчанию 10)
    #[serde(default = "default_max_rivers")]
    pub max_rivers: usize,

    /// Радиус озеленения вокруг рек в клетках (по умолчанию 5)
    #[serde(default = "default_vegetation_radius")]
    pub vegetation_radius: usize,

    /// Минимальное число вершин, при котором рельеф принимается (по умолчанию 10)
    #[serde(default = "default_min_summits")]
    pub min_summits: usize,

    /// Лимит попыток генерации рельефа до отказа (по умолчанию 64)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

fn default_rows() -> usize {
    100
}
fn default_columns() -> usize {
    100
}
fn default_sea_level() -> i32 {
    -64
}
fn default_tree_level_start() -> i32 {
    32
}
fn default_tree_level_end() -> i32 {
    156
}
fn default_snow_level() -> i32 {
    192
}
fn default_max_rivers() -> usize {
    10
}
fn default_vegetation_radius() -> usize {
    5
}
fn default_min_summits() -> usize {
    10
}
fn default_max_attempts() -> usize {
    64
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            seed: 0,
            rows: 100,
            columns: 100,
            sea_level: -64,
            tree_level_start: 32,
            tree_level_end: 156,
            snow_level: 192,
            max_rivers: 10,
            vegetation_radius: 5,
            min_summits: 10,
            max_attempts: 64,
        }
    }
}

impl GenerationParams {
    /// Загружает параметры из TOML-файла
    ///
    /// # Ошибки
    /// Возвращает ошибку, если файл не найден или содержит недопустимый формат.
    ///
    /// # Пример
    /// ```toml
    /// # world.toml
    /// seed = 42
    /// rows = 100
    /// columns = 100
    /// snow_level = 192
    /// ```
    pub fn from_toml_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let params: Self = toml::from_str(&contents)?;
        Ok(params)
    }

    /// Проверяет согласованность параметров до выделения сетки
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.rows < 2 || self.columns < 2 {
            return Err(GenerationError::InvalidDimension {
                rows: self.rows,
                columns: self.columns,
            });
        }
        if self.tree_level_start >= self.tree_level_end {
            return Err(GenerationError::InvalidConfiguration(format!(
                "tree_level_start ({}) must be below tree_level_end ({})",
                self.tree_level_start, self.tree_level_end
            )));
        }
        if self.snow_level <= self.tree_level_end {
            return Err(GenerationError::InvalidConfiguration(format!(
                "snow_level ({}) must be above tree_level_end ({})",
                self.snow_level, self.tree_level_end
            )));
        }
        if self.max_attempts == 0 {
            return Err(GenerationError::InvalidConfiguration(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = GenerationParams::default();
        assert!(params.validate().is_ok());
    }

    #[test]
    fn toml_fills_missing_fields_with_defaults() {
        let params: GenerationParams = toml::from_str("seed = 7\nrows = 33").unwrap();
        assert_eq!(params.seed, 7);
        assert_eq!(params.rows, 33);
        assert_eq!(params.columns, 100);
        assert_eq!(params.sea_level, -64);
        assert_eq!(params.snow_level, 192);
        assert_eq!(params.vegetation_radius, 5);
    }

    #[test]
    fn rejects_inverted_tree_levels() {
        let params = GenerationParams {
            tree_level_start: 156,
            tree_level_end: 32,
            ..GenerationParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(GenerationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_snow_below_tree_line() {
        let params = GenerationParams {
            snow_level: 100,
            ..GenerationParams::default()
        };
        assert!(matches!(
            params.validate(),
            Err(GenerationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn rejects_tiny_grid() {
        let params = GenerationParams {
            rows: 1,
            columns: 5,
            ..GenerationParams::default()
        };
        assert_eq!(
            params.validate(),
            Err(GenerationError::InvalidDimension {
                rows: 1,
                columns: 5
            })
        );
    }
}
