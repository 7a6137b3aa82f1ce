//! Game rule sets and the clock arithmetic derived from them.

use chrono::{DateTime, Utc};

use crate::{
    model::game_rules::{CreateGameRulesDto, GameRulesDto, UpdateGameRulesDto},
    server::error::AppError,
};

/// Name reported for the built-in rule set used when a match has none attached.
pub const DEFAULT_RULES_NAME: &str = "Default";

/// Upper bound on regulation periods in a rule set.
pub const MAX_PERIODS: i32 = 12;

/// Upper bound on the length of a regulation or overtime period.
pub const MAX_PERIOD_MINUTES: i32 = 60;

/// Overtime periods a game may run to before further periods are rejected.
pub const MAX_OVERTIME_PERIODS: i32 = 20;

/// A basketball rule set.
///
/// `id` and `created_at` are `None` for the built-in defaults returned by
/// [`GameRules::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct GameRules {
    pub id: Option<i32>,
    pub name: String,
    pub periods: i32,
    pub minutes_per_period: i32,
    pub overtime_minutes: i32,
    pub halftime_after_period: i32,
    pub team_fouls_for_bonus: i32,
    pub personal_foul_limit: i32,
    pub timeouts_per_team: i32,
    pub reset_timeouts_each_period: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            id: None,
            name: DEFAULT_RULES_NAME.to_string(),
            periods: 4,
            minutes_per_period: 10,
            overtime_minutes: 5,
            halftime_after_period: 2,
            team_fouls_for_bonus: 5,
            personal_foul_limit: 5,
            timeouts_per_team: 5,
            reset_timeouts_each_period: false,
            created_at: None,
        }
    }
}

impl GameRules {
    pub fn from_entity(entity: entity::game_rules::Model) -> Self {
        Self {
            id: Some(entity.id),
            name: entity.name,
            periods: entity.periods,
            minutes_per_period: entity.minutes_per_period,
            overtime_minutes: entity.overtime_minutes,
            halftime_after_period: entity.halftime_after_period,
            team_fouls_for_bonus: entity.team_fouls_for_bonus,
            personal_foul_limit: entity.personal_foul_limit,
            timeouts_per_team: entity.timeouts_per_team,
            reset_timeouts_each_period: entity.reset_timeouts_each_period,
            created_at: Some(entity.created_at),
        }
    }

    pub fn into_dto(self) -> GameRulesDto {
        GameRulesDto {
            id: self.id,
            name: self.name,
            periods: self.periods,
            minutes_per_period: self.minutes_per_period,
            overtime_minutes: self.overtime_minutes,
            halftime_after_period: self.halftime_after_period,
            team_fouls_for_bonus: self.team_fouls_for_bonus,
            personal_foul_limit: self.personal_foul_limit,
            timeouts_per_team: self.timeouts_per_team,
            reset_timeouts_each_period: self.reset_timeouts_each_period,
            created_at: self.created_at,
        }
    }

    pub fn is_overtime(&self, period: i32) -> bool {
        period > self.periods
    }

    /// Highest period number a game under these rules can reach.
    pub fn last_period(&self) -> i32 {
        self.periods + MAX_OVERTIME_PERIODS
    }

    /// Rejects period numbers outside `1..=last_period()`.
    pub fn check_period(&self, period: i32) -> Result<(), AppError> {
        if period < 1 {
            return Err(AppError::BadRequest(format!(
                "Invalid period {}; periods start at 1",
                period
            )));
        }
        if period > self.last_period() {
            return Err(AppError::BadRequest(format!(
                "Invalid period {}; these rules allow at most {}",
                period,
                self.last_period()
            )));
        }

        Ok(())
    }

    /// Length of the given period in seconds. Periods past regulation use the
    /// overtime length.
    pub fn period_length_seconds(&self, period: i32) -> i32 {
        if self.is_overtime(period) {
            self.overtime_minutes.saturating_mul(60)
        } else {
            self.minutes_per_period.saturating_mul(60)
        }
    }

    /// Game minute for a moment in a period.
    ///
    /// Adds the regulation and overtime time before `period` to the time
    /// elapsed in it and divides by sixty.
    ///
    /// # Arguments
    /// - `period` - Period number, starting at 1
    /// - `seconds_remaining` - Clock reading within that period
    ///
    /// # Returns
    /// - `Ok(i32)` - Elapsed game minute
    /// - `Err(AppError::BadRequest)` - Period outside `1..=last_period()` or clock
    ///   outside the period length
    pub fn elapsed_minute(&self, period: i32, seconds_remaining: i32) -> Result<i32, AppError> {
        self.check_period(period)?;

        let length = self.period_length_seconds(period);
        if seconds_remaining < 0 || seconds_remaining > length {
            return Err(AppError::BadRequest(format!(
                "seconds_remaining {} is outside period {} (0..={})",
                seconds_remaining, period, length
            )));
        }

        let earlier = i64::from(period - 1);
        let regulation = earlier.min(i64::from(self.periods));
        let overtime = (earlier - i64::from(self.periods)).max(0);
        let elapsed = regulation
            .checked_mul(i64::from(self.minutes_per_period) * 60)
            .zip(overtime.checked_mul(i64::from(self.overtime_minutes) * 60))
            .and_then(|(regulation, overtime)| regulation.checked_add(overtime))
            .map(|prior| prior + i64::from(length - seconds_remaining));

        elapsed
            .and_then(|seconds| i32::try_from(seconds / 60).ok())
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Game time for period {} is out of range",
                    period
                ))
            })
    }

    /// Short display label: `PRE` before tip-off, `Q1`..`Qn` in regulation,
    /// then `OT1`, `OT2`, ...
    pub fn period_label(&self, period: i32) -> String {
        if period < 1 {
            "PRE".to_string()
        } else if self.is_overtime(period) {
            format!("OT{}", period - self.periods)
        } else {
            format!("Q{}", period)
        }
    }

    pub fn is_halftime_after(&self, period: i32) -> bool {
        period == self.halftime_after_period
    }

    /// Rejects rule sets the clock arithmetic cannot work with.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::BadRequest("Rule set name is required".to_string()));
        }

        let positive = [
            ("periods", self.periods),
            ("minutes_per_period", self.minutes_per_period),
            ("overtime_minutes", self.overtime_minutes),
            ("personal_foul_limit", self.personal_foul_limit),
        ];
        if let Some((field, _)) = positive.iter().find(|(_, value)| *value < 1) {
            return Err(AppError::BadRequest(format!("{} must be at least 1", field)));
        }

        let non_negative = [
            ("halftime_after_period", self.halftime_after_period),
            ("team_fouls_for_bonus", self.team_fouls_for_bonus),
            ("timeouts_per_team", self.timeouts_per_team),
        ];
        if let Some((field, _)) = non_negative.iter().find(|(_, value)| *value < 0) {
            return Err(AppError::BadRequest(format!("{} must not be negative", field)));
        }

        let bounded = [
            ("periods", self.periods, MAX_PERIODS),
            ("minutes_per_period", self.minutes_per_period, MAX_PERIOD_MINUTES),
            ("overtime_minutes", self.overtime_minutes, MAX_PERIOD_MINUTES),
            ("halftime_after_period", self.halftime_after_period, self.periods),
        ];
        if let Some((field, _, max)) = bounded.iter().find(|(_, value, max)| value > max) {
            return Err(AppError::BadRequest(format!("{} must be at most {}", field, max)));
        }

        Ok(())
    }
}

/// Parameters for creating a rule set, with defaults applied to omitted fields.
#[derive(Debug, Clone)]
pub struct CreateGameRulesParams {
    pub rules: GameRules,
}

impl CreateGameRulesParams {
    pub fn from_dto(dto: CreateGameRulesDto) -> Self {
        let defaults = GameRules::default();

        Self {
            rules: GameRules {
                id: None,
                name: dto.name,
                periods: dto.periods.unwrap_or(defaults.periods),
                minutes_per_period: dto.minutes_per_period.unwrap_or(defaults.minutes_per_period),
                overtime_minutes: dto.overtime_minutes.unwrap_or(defaults.overtime_minutes),
                halftime_after_period: dto
                    .halftime_after_period
                    .unwrap_or(defaults.halftime_after_period),
                team_fouls_for_bonus: dto
                    .team_fouls_for_bonus
                    .unwrap_or(defaults.team_fouls_for_bonus),
                personal_foul_limit: dto
                    .personal_foul_limit
                    .unwrap_or(defaults.personal_foul_limit),
                timeouts_per_team: dto.timeouts_per_team.unwrap_or(defaults.timeouts_per_team),
                reset_timeouts_each_period: dto
                    .reset_timeouts_each_period
                    .unwrap_or(defaults.reset_timeouts_each_period),
                created_at: None,
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateGameRulesParams {
    pub name: Option<String>,
    pub periods: Option<i32>,
    pub minutes_per_period: Option<i32>,
    pub overtime_minutes: Option<i32>,
    pub halftime_after_period: Option<i32>,
    pub team_fouls_for_bonus: Option<i32>,
    pub personal_foul_limit: Option<i32>,
    pub timeouts_per_team: Option<i32>,
    pub reset_timeouts_each_period: Option<bool>,
}

impl UpdateGameRulesParams {
    pub fn from_dto(dto: UpdateGameRulesDto) -> Self {
        Self {
            name: dto.name,
            periods: dto.periods,
            minutes_per_period: dto.minutes_per_period,
            overtime_minutes: dto.overtime_minutes,
            halftime_after_period: dto.halftime_after_period,
            team_fouls_for_bonus: dto.team_fouls_for_bonus,
            personal_foul_limit: dto.personal_foul_limit,
            timeouts_per_team: dto.timeouts_per_team,
            reset_timeouts_each_period: dto.reset_timeouts_each_period,
        }
    }

    /// Overlays the provided fields on an existing rule set.
    pub fn apply_to(self, mut rules: GameRules) -> GameRules {
        if let Some(name) = self.name {
            rules.name = name;
        }
        if let Some(periods) = self.periods {
            rules.periods = periods;
        }
        if let Some(minutes) = self.minutes_per_period {
            rules.minutes_per_period = minutes;
        }
        if let Some(minutes) = self.overtime_minutes {
            rules.overtime_minutes = minutes;
        }
        if let Some(period) = self.halftime_after_period {
            rules.halftime_after_period = period;
        }
        if let Some(fouls) = self.team_fouls_for_bonus {
            rules.team_fouls_for_bonus = fouls;
        }
        if let Some(limit) = self.personal_foul_limit {
            rules.personal_foul_limit = limit;
        }
        if let Some(timeouts) = self.timeouts_per_team {
            rules.timeouts_per_team = timeouts;
        }
        if let Some(reset) = self.reset_timeouts_each_period {
            rules.reset_timeouts_each_period = reset;
        }
        rules
    }
}
