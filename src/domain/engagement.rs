//! Session-local engagement state for a single post. Nothing here is ever
//! written back to the Post Store; the state lives and dies with the
//! reader's session.

/// Like/bookmark toggles plus a like counter seeded from the post's static
/// like count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engagement {
    liked: bool,
    bookmarked: bool,
    likes: u64,
}

impl Engagement {
    pub fn seeded(likes: u64) -> Self {
        Self {
            liked: false,
            bookmarked: false,
            likes,
        }
    }

    pub fn liked(&self) -> bool {
        self.liked
    }

    pub fn bookmarked(&self) -> bool {
        self.bookmarked
    }

    pub fn likes(&self) -> u64 {
        self.likes
    }

    /// Flip the like toggle and move the counter with it. Returns the new
    /// counter value. Toggling twice restores the seed.
    pub fn toggle_like(&mut self) -> u64 {
        if self.liked {
            self.likes -= 1;
        } else {
            self.likes += 1;
        }
        self.liked = !self.liked;
        self.likes
    }

    /// Flip the bookmark toggle. Purely a display state, no counter.
    pub fn toggle_bookmark(&mut self) -> bool {
        self.bookmarked = !self.bookmarked;
        self.bookmarked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_like_twice_restores_the_seed() {
        let mut state = Engagement::seeded(89);
        assert_eq!(state.toggle_like(), 90);
        assert!(state.liked());
        assert_eq!(state.toggle_like(), 89);
        assert!(!state.liked());
    }

    #[test]
    fn bookmark_toggle_is_independent_of_likes() {
        let mut state = Engagement::seeded(10);
        assert!(state.toggle_bookmark());
        assert_eq!(state.likes(), 10);
        assert!(!state.toggle_bookmark());
    }

    #[test]
    fn zero_seed_never_underflows() {
        let mut state = Engagement::seeded(0);
        assert_eq!(state.toggle_like(), 1);
        assert_eq!(state.toggle_like(), 0);
    }
}
