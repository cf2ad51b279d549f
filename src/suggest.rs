use crate::model::Task;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// At or below this energy level only short tasks are considered.
pub const LOW_ENERGY_THRESHOLD: i32 = 5;

/// Longest task, in minutes, still considered short.
pub const SHORT_TASK_MINUTES: u32 = 20;

/// Pick a task for the given energy level.
///
/// With low energy the choice is made among short tasks, falling back to
/// every task if there are none. Otherwise every task is a candidate.
/// Returns `None` only when `tasks` is empty.
pub fn suggest_task<'a, R: Rng + ?Sized>(
    tasks: &'a [Task],
    energy_level: i32,
    rng: &mut R,
) -> Option<&'a Task> {
    if tasks.is_empty() {
        return None;
    }

    let candidates: Vec<&Task> = if energy_level <= LOW_ENERGY_THRESHOLD {
        tasks
            .iter()
            .filter(|t| t.estimated_minutes <= SHORT_TASK_MINUTES)
            .collect()
    } else {
        tasks.iter().collect()
    };
    debug!(energy_level, candidates = candidates.len(), "suggesting task");

    match candidates.choose(rng) {
        Some(task) => Some(*task),
        None => tasks.choose(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn task(name: &str, minutes: u32) -> Task {
        Task {
            name: name.to_string(),
            estimated_minutes: minutes,
        }
    }

    #[test]
    fn empty_list_gives_no_suggestion() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(suggest_task(&[], 3, &mut rng).is_none());
        assert!(suggest_task(&[], 9, &mut rng).is_none());
    }

    #[test]
    fn low_energy_never_picks_long_task_when_short_exists() {
        let tasks = vec![
            task("thesis chapter", 90),
            task("flashcards", 10),
            task("lecture", 45),
            task("quiz review", 20),
        ];
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            for energy in 1..=LOW_ENERGY_THRESHOLD {
                let picked = suggest_task(&tasks, energy, &mut rng).unwrap();
                assert!(picked.estimated_minutes <= SHORT_TASK_MINUTES);
            }
        }
    }

    #[test]
    fn low_energy_falls_back_to_all_tasks() {
        let tasks = vec![task("lecture", 45), task("lab", 60)];
        let mut rng = StdRng::seed_from_u64(7);
        let picked = suggest_task(&tasks, 2, &mut rng).unwrap();
        assert!(tasks.contains(picked));
    }

    #[test]
    fn high_energy_considers_every_task() {
        let tasks = vec![task("flashcards", 10), task("lecture", 45)];
        let mut seen_long = false;
        let mut seen_short = false;
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            match suggest_task(&tasks, 8, &mut rng).unwrap().estimated_minutes {
                10 => seen_short = true,
                _ => seen_long = true,
            }
        }
        assert!(seen_short && seen_long);
    }
}
