// src/rivers.rs
//! Прокладка рек: поиск с возвратом от вершин к морю
//!
//! Река стартует на заснеженной вершине и спускается строго вниз по высоте,
//! всегда пробуя сначала самого низкого непосещённого соседа. Если ветка
//! упирается в локальную впадину выше уровня моря, поиск откатывается на шаг
//! назад и пробует следующего кандидата. Путь фиксируется в местности только
//! после того, как достигнута клетка на уровне моря: неудачные ветки следов
//! не оставляют.
//!
//! Рекурсия заменена явным стеком кадров: глубина спуска в худшем случае
//! равна площади сетки.

use crate::biome::Terrain;
use crate::grid::neighbours8;
use crate::heightfield::HeightField;
use crate::summits::find_summits;
use rand::Rng;
use rand::seq::SliceRandom;

/// Кадр поиска: клетка пути и её кандидаты по возрастанию высоты
struct Frame {
    idx: usize,
    candidates: Vec<usize>,
    next: usize,
}

/// Соседи клетки, отсортированные по возрастанию высоты
///
/// Равные высоты упорядочиваются построчным индексом, чтобы обход был
/// воспроизводимым.
fn sorted_candidates(field: &HeightField, idx: usize) -> Vec<usize> {
    let mut candidates: Vec<usize> = neighbours8(field.rows, field.columns, idx).collect();
    candidates.sort_by_key(|&n| (field.data[n], n));
    candidates
}

/// Прокладывает одну реку от `source` до моря
///
/// Возвращает зафиксированный путь (от истока вниз) или `None`, если до моря
/// спуститься не удалось. Клетки пути помечаются рекой в `marks`; сама
/// морская клетка рекой не становится. Исток на уровне моря — успех с пустым
/// путём.
pub fn carve_river(
    field: &HeightField,
    marks: &mut [Option<Terrain>],
    sea_level: i32,
    source: (usize, usize),
) -> Option<Vec<(usize, usize)>> {
    let src = source.0 * field.columns + source.1;
    if field.data[src] <= sea_level {
        return Some(Vec::new());
    }

    // Посещённые клетки не откатываются: провалившуюся ветку нет смысла
    // обходить повторно из другого кадра
    let mut visited = vec![false; field.data.len()];
    visited[src] = true;

    let mut stack = vec![Frame {
        idx: src,
        candidates: sorted_candidates(field, src),
        next: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        if frame.next >= frame.candidates.len() {
            stack.pop(); // кандидаты кончились, откат
            continue;
        }
        let candidate = frame.candidates[frame.next];
        frame.next += 1;

        if visited[candidate] {
            continue;
        }

        // Проверка моря идёт раньше проверки спуска: клетка на уровне моря
        // завершает реку, даже если она не ниже родителя
        if field.data[candidate] <= sea_level {
            let path: Vec<(usize, usize)> = stack
                .iter()
                .map(|f| (f.idx / field.columns, f.idx % field.columns))
                .collect();
            for &(row, column) in &path {
                marks[row * field.columns + column] = Some(Terrain::River);
            }
            return Some(path);
        }

        // Спуск строго вниз
        if field.data[candidate] < field.data[frame.idx] {
            visited[candidate] = true;
            let candidates = sorted_candidates(field, candidate);
            stack.push(Frame {
                idx: candidate,
                candidates,
                next: 0,
            });
        }
    }

    None
}

/// Прокладывает реки от заснеженных вершин к морю
///
/// Если вершин больше `max_rivers`, источники выбираются без повторов из
/// переданного генератора случайных чисел. Возвращает пути успешных рек.
pub fn generate_rivers<R: Rng>(
    field: &HeightField,
    marks: &mut [Option<Terrain>],
    sea_level: i32,
    snow_level: i32,
    max_rivers: usize,
    rng: &mut R,
) -> Vec<Vec<(usize, usize)>> {
    let summits = find_summits(field, snow_level);
    let sources: Vec<(usize, usize)> = if summits.len() > max_rivers {
        summits.choose_multiple(rng, max_rivers).copied().collect()
    } else {
        summits
    };

    let mut rivers = Vec::new();
    for source in sources {
        if let Some(path) = carve_river(field, marks, sea_level, source) {
            if !path.is_empty() {
                rivers.push(path);
            }
        }
    }
    rivers
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const SEA: i32 = -64;

    fn field(rows: usize, columns: usize, data: Vec<i32>) -> HeightField {
        assert_eq!(data.len(), rows * columns);
        HeightField {
            rows,
            columns,
            data,
        }
    }

    fn no_marks(len: usize) -> Vec<Option<Terrain>> {
        vec![None; len]
    }

    #[test]
    fn straight_descent_reaches_the_sea() {
        let f = field(1, 4, vec![200, 100, 50, -100]);
        let mut marks = no_marks(4);
        let path = carve_river(&f, &mut marks, SEA, (0, 0)).unwrap();
        assert_eq!(path, vec![(0, 0), (0, 1), (0, 2)]);
        assert_eq!(marks[0], Some(Terrain::River));
        assert_eq!(marks[2], Some(Terrain::River));
        // морская клетка рекой не помечается
        assert_eq!(marks[3], None);
    }

    #[test]
    fn path_is_strictly_descending() {
        let f = field(
            3,
            3,
            vec![200, 20, 90, 90, 95, 90, 85, 80, -100],
        );
        let mut marks = no_marks(9);
        let path = carve_river(&f, &mut marks, SEA, (0, 0)).unwrap();
        let mut previous = i32::MAX;
        for &(row, column) in &path {
            let e = f.get(row, column);
            assert!(e < previous);
            previous = e;
        }
    }

    #[test]
    fn dead_end_branch_is_backtracked_and_left_unmarked() {
        // Самый низкий сосед истока (20) — тупик: вокруг него нет ни моря,
        // ни клетки ниже. Поиск обязан откатиться и уйти через (1,0)
        let f = field(
            3,
            3,
            vec![200, 20, 90, 90, 95, 90, 85, 80, -100],
        );
        let mut marks = no_marks(9);
        let path = carve_river(&f, &mut marks, SEA, (0, 0)).unwrap();
        assert_eq!(path, vec![(0, 0), (1, 0), (2, 1)]);
        // тупиковая ветка не оставила следа
        assert_eq!(marks[1], None);
    }

    #[test]
    fn failed_carve_leaves_no_marks() {
        // впадина 10 выше уровня моря, моря в сетке нет
        let f = field(1, 4, vec![200, 10, 20, 30]);
        let mut marks = no_marks(4);
        assert!(carve_river(&f, &mut marks, SEA, (0, 0)).is_none());
        assert!(marks.iter().all(Option::is_none));
    }

    #[test]
    fn source_already_at_sea_level_is_a_trivial_success() {
        let f = field(1, 2, vec![-64, 0]);
        let mut marks = no_marks(2);
        let path = carve_river(&f, &mut marks, SEA, (0, 0)).unwrap();
        assert!(path.is_empty());
        assert!(marks.iter().all(Option::is_none));
    }

    #[test]
    fn river_of_one_cell_next_to_the_sea() {
        let f = field(1, 3, vec![100, 40, 45]);
        let mut marks = no_marks(3);
        let path = carve_river(&f, &mut marks, 40, (0, 0)).unwrap();
        assert_eq!(path, vec![(0, 0)]);
        assert_eq!(marks[1], None);
    }

    #[test]
    fn single_summit_yields_single_river() {
        // единственная вершина выше снега в центре, море по правому краю
        let f = field(
            3,
            3,
            vec![100, 120, -100, 110, 200, -100, 100, 90, -100],
        );
        let mut marks = no_marks(9);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let rivers = generate_rivers(&f, &mut marks, SEA, 192, 10, &mut rng);
        assert_eq!(rivers.len(), 1);
        assert_eq!(rivers[0][0], (1, 1));
    }

    #[test]
    fn no_summits_means_no_rivers() {
        let f = field(2, 2, vec![-200, -210, -220, -230]);
        let mut marks = no_marks(4);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let rivers = generate_rivers(&f, &mut marks, SEA, 192, 10, &mut rng);
        assert!(rivers.is_empty());
        assert!(marks.iter().all(Option::is_none));
    }

    #[test]
    fn summit_sampling_respects_max_rivers() {
        // шахматный рельеф: 16 изолированных пиков над морем, каждый пик
        // граничит с морем, поэтому каждый выбранный исток даёт реку
        let mut data = vec![-100i32; 49];
        for row in (0..7).step_by(2) {
            for column in (0..7).step_by(2) {
                data[row * 7 + column] = 250;
            }
        }
        let f = field(7, 7, data);
        assert_eq!(find_summits(&f, 192).len(), 16);

        let mut marks = no_marks(49);
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let rivers = generate_rivers(&f, &mut marks, SEA, 192, 3, &mut rng);
        assert_eq!(rivers.len(), 3);
    }
}
