//! Section registry - pure derivation from view state to what the main pane shows
//!
//! Nothing here holds state. Every render asks the registry for a fresh
//! descriptor built from the current wallet balance and weather reading.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use thiserror::Error;

use crate::constants::CURRENCY;
use crate::models::WeatherReading;

pub const LOW_BALANCE_ADVICE: &str =
    "Your balance is running low. Consider topping up or finding budget-friendly options.";
pub const MODERATE_BALANCE_ADVICE: &str =
    "You have a moderate balance. Enjoy your activities while keeping an eye on your spending.";
pub const HEALTHY_BALANCE_ADVICE: &str =
    "Your balance is healthy! Feel free to splurge on premium experiences.";

pub const SUNNY_DRINK: &str =
    "On this sunny day, we recommend visiting Inzora Rooftop Cafe for refreshing drinks with a view!";
pub const RAINY_DRINK: &str =
    "It's a bit rainy today. How about warming up with a coffee at Question Coffee Cafe?";

/// Label of the inert wallet action
pub const TOP_UP_LABEL: &str = "Top up wallet";

/// One of the six fixed views selectable from the sidebar
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Dashboard,
    Wallet,
    Accommodations,
    Events,
    Transport,
    Weather,
}

impl Section {
    /// Sidebar order
    pub const ALL: [Section; 6] = [
        Section::Dashboard,
        Section::Wallet,
        Section::Accommodations,
        Section::Events,
        Section::Transport,
        Section::Weather,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Wallet => "Wallet",
            Section::Accommodations => "Accommodations",
            Section::Events => "Events",
            Section::Transport => "Transport",
            Section::Weather => "Weather",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "🏠",
            Section::Wallet => "💳",
            Section::Accommodations => "📍",
            Section::Events => "📅",
            Section::Transport => "🚌",
            Section::Weather => "☀️",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Section::Dashboard => 0,
            Section::Wallet => 1,
            Section::Accommodations => 2,
            Section::Events => 3,
            Section::Transport => 4,
            Section::Weather => 5,
        }
    }

    pub fn from_index(index: usize) -> Option<Section> {
        Section::ALL.get(index).copied()
    }

    pub fn next(&self) -> Section {
        Section::ALL[(self.index() + 1) % Section::ALL.len()]
    }

    pub fn prev(&self) -> Section {
        let len = Section::ALL.len();
        Section::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum SectionError {
    #[error("unknown section: {0:?}")]
    Unknown(String),
}

impl FromStr for Section {
    type Err = SectionError;

    /// Exact, case-sensitive match on the sidebar label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .iter()
            .copied()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| SectionError::Unknown(s.to_string()))
    }
}

/// A renderable piece of section content
#[derive(Clone, Debug, PartialEq)]
pub enum Fragment {
    Text(String),
    List { heading: String, items: Vec<String> },
    Card { title: String, lines: Vec<String> },
    /// A button label
    Action(String),
}

/// Title, subtitle and content for one section
#[derive(Clone, Debug, PartialEq)]
pub struct SectionDescriptor {
    pub title: String,
    pub subtitle: String,
    pub content: Vec<Fragment>,
}

/// The slice of view state the registry derives from
#[derive(Clone, Copy, Debug)]
pub struct SectionContext<'a> {
    pub user_name: &'a str,
    pub wallet_balance: i64,
    pub weather: &'a WeatherReading,
}

/// A mocked upcoming event
pub struct Event {
    pub name: &'static str,
    pub venue: Option<&'static str>,
    pub date: Option<NaiveDate>,
}

pub fn upcoming_events() -> Vec<Event> {
    vec![
        Event {
            name: "Kigali Jazz Festival",
            venue: Some("Kigali Convention Center"),
            date: NaiveDate::from_ymd_opt(2023, 7, 15),
        },
        Event {
            name: "Rwanda International Film Festival",
            venue: None,
            date: None,
        },
    ]
}

const ACCOMMODATIONS: [&str; 2] = [
    "Hotel des Mille Collines",
    "Radisson Blu Hotel & Convention Centre",
];

const TRANSPORT_OPTIONS: [&str; 2] = ["Moto-taxis", "Public buses"];

/// Spending advice tiered on balance: below 500, below 2000, otherwise
pub fn wallet_advice(balance: i64) -> &'static str {
    if balance < 500 {
        LOW_BALANCE_ADVICE
    } else if balance < 2000 {
        MODERATE_BALANCE_ADVICE
    } else {
        HEALTHY_BALANCE_ADVICE
    }
}

/// Only the exact condition "Sunny" gets the rooftop suggestion
pub fn drink_recommendation(weather: &WeatherReading) -> &'static str {
    if weather.condition == "Sunny" {
        SUNNY_DRINK
    } else {
        RAINY_DRINK
    }
}

fn amount(balance: i64) -> String {
    format!("{} {}", balance, CURRENCY)
}

fn list(heading: &str, items: &[&str]) -> Fragment {
    Fragment::List {
        heading: heading.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

/// Build the descriptor for one section
pub fn describe(section: Section, ctx: &SectionContext<'_>) -> SectionDescriptor {
    let (title, subtitle, content) = match section {
        Section::Dashboard => {
            let events = upcoming_events();
            let mut event_lines = Vec::new();
            if let Some(next) = events.first() {
                event_lines.push(next.name.to_string());
                if let Some(date) = next.date {
                    event_lines.push(date.format("%Y-%m-%d").to_string());
                }
                if let Some(venue) = next.venue {
                    event_lines.push(venue.to_string());
                }
            }

            (
                format!("Welcome, {}!", ctx.user_name),
                "What would you like to explore in Rwanda today?".to_string(),
                vec![
                    Fragment::Card {
                        title: "Wallet Balance".to_string(),
                        lines: vec![amount(ctx.wallet_balance), "Available balance".to_string()],
                    },
                    Fragment::Card {
                        title: "Upcoming Event".to_string(),
                        lines: event_lines,
                    },
                    Fragment::Card {
                        title: "Weather".to_string(),
                        lines: vec![ctx.weather.temperature_label(), ctx.weather.condition.clone()],
                    },
                ],
            )
        }
        Section::Wallet => (
            "Wallet".to_string(),
            "Manage your finances".to_string(),
            vec![
                Fragment::Text(format!("Wallet balance: {}", amount(ctx.wallet_balance))),
                Fragment::Text(wallet_advice(ctx.wallet_balance).to_string()),
                Fragment::Action(TOP_UP_LABEL.to_string()),
            ],
        ),
        Section::Accommodations => (
            "Accommodations".to_string(),
            "Find a place to stay".to_string(),
            vec![list("Recommended accommodations:", &ACCOMMODATIONS)],
        ),
        Section::Events => {
            let names: Vec<&str> = upcoming_events().iter().map(|e| e.name).collect();
            (
                "Events".to_string(),
                "Discover what's happening".to_string(),
                vec![list("Upcoming events:", &names)],
            )
        }
        Section::Transport => (
            "Transport".to_string(),
            "Get around Kigali".to_string(),
            vec![list("Recommended transport options:", &TRANSPORT_OPTIONS)],
        ),
        Section::Weather => (
            "Weather".to_string(),
            "Stay informed".to_string(),
            vec![
                Fragment::Text(format!(
                    "Current weather: {}, {}",
                    ctx.weather.temperature_label(),
                    ctx.weather.condition
                )),
                Fragment::Text(drink_recommendation(ctx.weather).to_string()),
            ],
        ),
    };

    SectionDescriptor {
        title,
        subtitle,
        content,
    }
}

/// Descriptors for every section, in sidebar order
pub fn registry(ctx: &SectionContext<'_>) -> Vec<(Section, SectionDescriptor)> {
    Section::ALL
        .iter()
        .map(|section| (*section, describe(*section, ctx)))
        .collect()
}
