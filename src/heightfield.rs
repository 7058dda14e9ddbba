// src/heightfield.rs
//! Синтез карты высот алгоритмом diamond-square
//!
//! Четыре угла сетки засеваются случайными высотами, после чего квадранты
//! рекурсивно делятся: центр и середины граней получают среднее по опорным
//! углам плюс случайное смещение. Амплитуда смещения масштабируется долей
//! квадранта от полной сетки (`p_max`), а не классическим затуханием
//! шероховатости — это осознанное свойство генератора, дающее характерный
//! рельеф, и оно воспроизводится точно.
//!
//! Вместо нативной рекурсии используется явный список работ: глубина рекурсии
//! пропорциональна площади сетки и на больших картах переполнила бы стек.

use rand::Rng;

/// Карта высот: по одному целому значению на клетку, построчное хранение
///
/// Высоты концептуально лежат в диапазоне `[-256, 256]`, но из-за смещений
/// при усреднении могут выходить за него (не дальше `±768`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeightField {
    pub rows: usize,
    pub columns: usize,
    pub data: Vec<i32>,
}

impl HeightField {
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> i32 {
        self.data[row * self.columns + column]
    }
}

/// Среднее по опорным точкам плюс случайное смещение, промасштабированное `p_max`
fn displace<R: Rng>(rng: &mut R, p_max: f64, average: f64) -> i32 {
    (average + p_max * rng.gen_range(-256.0..=256.0)).round() as i32
}

/// Синтезирует карту высот `rows × columns`
///
/// Обе размерности должны быть не меньше 2: меньшей сетке не хватает углов
/// для засева. Сами размеры произвольные (не только `2^n + 1`); середины
/// считаются с округлением вниз. Вся случайность берётся из переданного
/// генератора, поэтому одинаковый сид даёт одинаковую карту.
pub fn synthesize<R: Rng>(rows: usize, columns: usize, rng: &mut R) -> HeightField {
    debug_assert!(rows >= 2 && columns >= 2, "grid must be at least 2×2");

    let mut data = vec![0i32; rows * columns];
    // Битсет мемоизации: живёт только на время синтеза
    let mut filled = vec![false; rows * columns];

    // Засев четырёх углов
    for (row, column) in [
        (0, 0),
        (0, columns - 1),
        (rows - 1, 0),
        (rows - 1, columns - 1),
    ] {
        let idx = row * columns + column;
        data[idx] = rng.gen_range(-256..=256);
        filled[idx] = true;
    }

    let mut quadrants = vec![(0usize, 0usize, rows - 1, columns - 1)];
    while let Some((r0, c0, r1, c1)) = quadrants.pop() {
        if r1 <= r0 && c1 <= c0 {
            continue; // квадрант выродился в одну клетку
        }

        let mr = r0 + (r1 - r0) / 2;
        let mc = c0 + (c1 - c0) / 2;

        let p_row = (r1 - r0) as f64 / rows as f64;
        let p_col = (c1 - c0) as f64 / columns as f64;
        let p_max = (p_row + p_col) / 2.0;

        let nw = f64::from(data[r0 * columns + c0]);
        let ne = f64::from(data[r0 * columns + c1]);
        let sw = f64::from(data[r1 * columns + c0]);
        let se = f64::from(data[r1 * columns + c1]);

        // Центр и четыре середины граней; позиция, записанная ранее,
        // не пересчитывается и не тратит случайность
        let targets = [
            (mr * columns + mc, (nw + ne + sw + se) / 4.0),
            (r0 * columns + mc, (nw + ne) / 2.0),
            (r1 * columns + mc, (sw + se) / 2.0),
            (mr * columns + c0, (nw + sw) / 2.0),
            (mr * columns + c1, (ne + se) / 2.0),
        ];

        let mut fresh = false;
        for (idx, average) in targets {
            if !filled[idx] {
                data[idx] = displace(rng, p_max, average);
                filled[idx] = true;
                fresh = true;
            }
        }

        // Если все пять середин уже были известны, глубже ничего нового нет.
        // Стек LIFO: кладём в обратном порядке, чтобы обход шёл СЗ, СВ, ЮЗ, ЮВ
        if fresh {
            quadrants.push((mr, mc, r1, c1));
            quadrants.push((mr, c0, r1, mc));
            quadrants.push((r0, mc, mr, c1));
            quadrants.push((r0, c0, mr, mc));
        }
    }

    debug_assert!(filled.iter().all(|&f| f));

    HeightField {
        rows,
        columns,
        data,
    }
}
