//! Side-by-side cost of filling a batch of roles in-house, via freelancer, or
//! through a headhunter, as shown on the active-sourcing landing page.

use serde::{Deserialize, Serialize};

use super::vacancy_cost::Seniority;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourcingChannel {
    InHouse,
    Freelancer,
    Headhunter,
}

impl SourcingChannel {
    pub const fn ordered() -> [Self; 3] {
        [Self::InHouse, Self::Freelancer, Self::Headhunter]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InHouse => "In-house sourcing",
            Self::Freelancer => "Freelance recruiter",
            Self::Headhunter => "Headhunter",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelProfile {
    pub time_to_hire_label: &'static str,
    pub success_rate_percent: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceSalaries {
    pub junior: i64,
    pub senior: i64,
    pub lead: i64,
}

impl ReferenceSalaries {
    pub const fn salary(&self, seniority: Seniority) -> i64 {
        match seniority {
            Seniority::Junior => self.junior,
            Seniority::Senior => self.senior,
            Seniority::Lead => self.lead,
        }
    }
}

/// Market assumptions behind the comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourcingConfig {
    pub sourcing_hours_per_position: i64,
    pub freelancer_day_rate: i64,
    pub freelancer_days_per_position: i64,
    pub headhunter_fee_percent: i64,
    pub reference_salaries: ReferenceSalaries,
    pub in_house: ChannelProfile,
    pub freelancer: ChannelProfile,
    pub headhunter: ChannelProfile,
}

impl Default for SourcingConfig {
    fn default() -> Self {
        Self {
            sourcing_hours_per_position: 80,
            freelancer_day_rate: 600,
            freelancer_days_per_position: 15,
            headhunter_fee_percent: 22,
            reference_salaries: ReferenceSalaries {
                junior: 50_000,
                senior: 75_000,
                lead: 95_000,
            },
            in_house: ChannelProfile {
                time_to_hire_label: "12-16 weeks",
                success_rate_percent: 45,
            },
            freelancer: ChannelProfile {
                time_to_hire_label: "8-12 weeks",
                success_rate_percent: 60,
            },
            headhunter: ChannelProfile {
                time_to_hire_label: "4-6 weeks",
                success_rate_percent: 92,
            },
        }
    }
}

impl SourcingConfig {
    fn profile(&self, channel: SourcingChannel) -> ChannelProfile {
        match channel {
            SourcingChannel::InHouse => self.in_house,
            SourcingChannel::Freelancer => self.freelancer,
            SourcingChannel::Headhunter => self.headhunter,
        }
    }
}

/// Slider state of the ROI calculator. Values are clamped on evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcingScenario {
    pub open_positions: i64,
    pub hr_hourly_rate: i64,
    pub current_time_to_hire_days: i64,
    pub seniority: Seniority,
}

impl SourcingScenario {
    pub const POSITIONS: (i64, i64) = (1, 10);
    pub const HOURLY_RATE: (i64, i64) = (30, 80);
    pub const TIME_TO_HIRE_DAYS: (i64, i64) = (30, 200);

    pub fn clamped(self) -> Self {
        Self {
            open_positions: self
                .open_positions
                .clamp(Self::POSITIONS.0, Self::POSITIONS.1),
            hr_hourly_rate: self
                .hr_hourly_rate
                .clamp(Self::HOURLY_RATE.0, Self::HOURLY_RATE.1),
            current_time_to_hire_days: self
                .current_time_to_hire_days
                .clamp(Self::TIME_TO_HIRE_DAYS.0, Self::TIME_TO_HIRE_DAYS.1),
            seniority: self.seniority,
        }
    }
}

impl Default for SourcingScenario {
    fn default() -> Self {
        Self {
            open_positions: 3,
            hr_hourly_rate: 45,
            current_time_to_hire_days: 120,
            seniority: Seniority::Senior,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelQuote {
    pub channel: SourcingChannel,
    pub label: &'static str,
    pub cost: i64,
    pub time_to_hire_label: &'static str,
    pub success_rate_percent: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourcingComparison {
    pub scenario: SourcingScenario,
    pub quotes: Vec<ChannelQuote>,
    pub cheapest: SourcingChannel,
    pub fastest: SourcingChannel,
    pub recommendation: SourcingChannel,
}

impl SourcingComparison {
    pub fn quote(&self, channel: SourcingChannel) -> Option<&ChannelQuote> {
        self.quotes.iter().find(|quote| quote.channel == channel)
    }
}

pub fn compare_channels(scenario: SourcingScenario, config: &SourcingConfig) -> SourcingComparison {
    let scenario = scenario.clamped();
    let positions = scenario.open_positions;

    let quotes: Vec<ChannelQuote> = SourcingChannel::ordered()
        .into_iter()
        .map(|channel| {
            let cost = match channel {
                SourcingChannel::InHouse => {
                    positions * config.sourcing_hours_per_position * scenario.hr_hourly_rate
                }
                SourcingChannel::Freelancer => {
                    positions * config.freelancer_day_rate * config.freelancer_days_per_position
                }
                SourcingChannel::Headhunter => {
                    positions
                        * config.reference_salaries.salary(scenario.seniority)
                        * config.headhunter_fee_percent
                        / 100
                }
            };
            let profile = config.profile(channel);
            ChannelQuote {
                channel,
                label: channel.label(),
                cost,
                time_to_hire_label: profile.time_to_hire_label,
                success_rate_percent: profile.success_rate_percent,
            }
        })
        .collect();

    // Ties go to the later channel.
    let cheapest = quotes
        .iter()
        .fold(None::<&ChannelQuote>, |best, quote| match best {
            Some(best) if best.cost < quote.cost => Some(best),
            _ => Some(quote),
        })
        .map(|quote| quote.channel)
        .unwrap_or(SourcingChannel::InHouse);

    SourcingComparison {
        scenario,
        quotes,
        cheapest,
        fastest: SourcingChannel::Headhunter,
        recommendation: recommend(&scenario),
    }
}

fn recommend(scenario: &SourcingScenario) -> SourcingChannel {
    if scenario.open_positions <= 1 && scenario.seniority == Seniority::Junior {
        SourcingChannel::InHouse
    } else if scenario.open_positions >= 3 || scenario.seniority == Seniority::Lead {
        SourcingChannel::Headhunter
    } else {
        SourcingChannel::Freelancer
    }
}
