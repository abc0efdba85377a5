//! Game configuration options.

/// Scoring thresholds for a cribbage game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cribcount::GameOptions;
///
/// let options = GameOptions::default()
///     .with_target_score(61)
///     .with_skunk_line(31)
///     .with_double_skunk_line(0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameOptions {
    /// Score needed to win.
    pub target_score: u16,
    /// Points awarded to the dealer when the starter is a Jack.
    pub his_heels_points: u8,
    /// A loser below this score is skunked.
    pub skunk_line: u16,
    /// A loser below this score is double skunked.
    pub double_skunk_line: u16,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            target_score: 121,
            his_heels_points: 2,
            skunk_line: 91,
            double_skunk_line: 61,
        }
    }
}

impl GameOptions {
    /// Sets the score needed to win.
    ///
    /// # Example
    ///
    /// ```
    /// use cribcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_target_score(61);
    /// assert_eq!(options.target_score, 61);
    /// ```
    #[must_use]
    pub const fn with_target_score(mut self, target: u16) -> Self {
        self.target_score = target;
        self
    }

    /// Sets the points awarded for his heels.
    ///
    /// # Example
    ///
    /// ```
    /// use cribcount::GameOptions;
    ///
    /// let options = GameOptions::default().with_his_heels_points(1);
    /// assert_eq!(options.his_heels_points, 1);
    /// ```
    #[must_use]
    pub const fn with_his_heels_points(mut self, points: u8) -> Self {
        self.his_heels_points = points;
        self
    }

    /// Sets the skunk line.
    #[must_use]
    pub const fn with_skunk_line(mut self, line: u16) -> Self {
        self.skunk_line = line;
        self
    }

    /// Sets the double skunk line.
    #[must_use]
    pub const fn with_double_skunk_line(mut self, line: u16) -> Self {
        self.double_skunk_line = line;
        self
    }
}
