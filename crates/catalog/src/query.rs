use crate::scene::Scene;

/// One accordion group: a movie title and its matching scenes.
///
/// Scenes keep their dataset order; groups appear in first-appearance order
/// of their movie within the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieGroup<'a> {
    pub movie: &'a str,
    pub scenes: Vec<&'a Scene>,
}

/// Case-insensitive substring match of `term` against the movie title.
///
/// An empty term matches everything.
fn matches_term(movie: &str, term_lower: &str) -> bool {
    term_lower.is_empty() || movie.to_lowercase().contains(term_lower)
}

/// Filters `scenes` by `search_term` and groups the survivors by movie title.
///
/// Pure and deterministic; re-evaluated on every search-term change. No
/// matches yields an empty vec, which callers render as the no-results state.
pub fn group_by_movie<'a>(scenes: &'a [Scene], search_term: &str) -> Vec<MovieGroup<'a>> {
    let term_lower = search_term.to_lowercase();
    let mut groups: Vec<MovieGroup<'a>> = Vec::new();

    for scene in scenes {
        if !matches_term(&scene.movie, &term_lower) {
            continue;
        }
        match groups.iter_mut().find(|g| g.movie == scene.movie) {
            Some(group) => group.scenes.push(scene),
            None => groups.push(MovieGroup {
                movie: &scene.movie,
                scenes: vec![scene],
            }),
        }
    }

    groups
}
