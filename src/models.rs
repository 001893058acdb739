use serde::{Deserialize, Serialize};

use crate::constants::WEBSITE_SCHEME;

/// Postal address; only the city is used
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
}

/// A user record as returned by the users endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Bare hostname, no scheme
    pub website: String,
    pub address: Address,
}

impl User {
    /// Link target for the website column
    pub fn website_url(&self) -> String {
        format!("{}{}", WEBSITE_SCHEME, self.website)
    }

    pub fn city(&self) -> &str {
        &self.address.city
    }
}

/// Users whose city matches `city` exactly, in fetch order.
/// `None` keeps every user.
pub fn filter_by_city<'a>(
    users: &'a [User],
    city: Option<&'a str>,
) -> impl Iterator<Item = &'a User> + 'a {
    users
        .iter()
        .filter(move |user| city.map_or(true, |c| user.city() == c))
}

/// Click counter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counter {
    count: u64,
}

impl Counter {
    pub fn new() -> Self {
        Counter::default()
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }

    /// Label shown on the counter button
    pub fn label(&self) -> String {
        format!("count is {}", self.count)
    }
}
