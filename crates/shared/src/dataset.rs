//! Static category → people dataset used for browsing before any fetch.

use std::{cmp::Ordering, collections::HashSet};

use serde::{Deserialize, Serialize};

use crate::{domain::CategoryEntry, error::DatasetError};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub label: String,
    pub entries: Vec<CategoryEntry>,
}

/// Validated, immutable dataset. Categories keep their source order;
/// display order comes from the `*_sorted` accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    categories: Vec<Category>,
}

#[derive(Debug, Deserialize)]
struct DatasetFile {
    categories: Vec<Category>,
}

/// Case-insensitive ordering with a byte-wise tiebreak so sorting is total.
fn display_order(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

impl Dataset {
    pub fn new(categories: Vec<Category>) -> Result<Self, DatasetError> {
        if categories.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut seen = HashSet::new();
        for category in &categories {
            if category.label.trim().is_empty() {
                return Err(DatasetError::BlankLabel);
            }
            if !seen.insert(category.label.as_str()) {
                return Err(DatasetError::DuplicateCategory(category.label.clone()));
            }
            if category.entries.is_empty() {
                return Err(DatasetError::EmptyCategory(category.label.clone()));
            }
            if category.entries.iter().any(|e| e.name.trim().is_empty()) {
                return Err(DatasetError::BlankEntryName(category.label.clone()));
            }
        }

        Ok(Self { categories })
    }

    /// Parses `{"categories":[{"label":..,"entries":[{"name":..,"company":..}]}]}`.
    pub fn from_json(raw: &str) -> Result<Self, DatasetError> {
        let file: DatasetFile = serde_json::from_str(raw)?;
        Self::new(file.categories)
    }

    pub fn builtin() -> Self {
        let categories = BUILTIN
            .iter()
            .map(|(label, entries)| Category {
                label: (*label).to_string(),
                entries: entries
                    .iter()
                    .map(|(name, company)| CategoryEntry::new(*name, *company))
                    .collect(),
            })
            .collect();
        Self { categories }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn contains_category(&self, label: &str) -> bool {
        self.category(label).is_some()
    }

    pub fn category(&self, label: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.label == label)
    }

    /// Entries in source order.
    pub fn entries(&self, label: &str) -> Option<&[CategoryEntry]> {
        self.category(label).map(|c| c.entries.as_slice())
    }

    pub fn contains_person(&self, label: &str, name: &str) -> bool {
        self.entries(label)
            .is_some_and(|entries| entries.iter().any(|e| e.name == name))
    }

    pub fn categories_sorted(&self) -> Vec<&Category> {
        let mut sorted: Vec<&Category> = self.categories.iter().collect();
        sorted.sort_by(|a, b| display_order(&a.label, &b.label));
        sorted
    }

    /// Entries of `label` sorted by name; empty when the category is unknown.
    pub fn entries_sorted(&self, label: &str) -> Vec<&CategoryEntry> {
        let mut sorted: Vec<&CategoryEntry> = self
            .entries(label)
            .map(|entries| entries.iter().collect())
            .unwrap_or_default();
        sorted.sort_by(|a, b| display_order(&a.name, &b.name));
        sorted
    }

    /// First `count` names in source order, joined for a card preview.
    pub fn preview_names(&self, label: &str, count: usize) -> String {
        self.entries(label)
            .map(|entries| {
                entries
                    .iter()
                    .take(count)
                    .map(|e| e.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            })
            .unwrap_or_default()
    }
}

type BuiltinCategory = (&'static str, &'static [(&'static str, &'static str)]);

const BUILTIN: &[BuiltinCategory] = &[
    (
        "AI & Deep Tech",
        &[
            ("Sam Altman", "OpenAI"),
            ("Demis Hassabis", "Google DeepMind"),
            ("Jensen Huang", "NVIDIA"),
            ("Dario Amodei", "Anthropic"),
            ("Mustafa Suleyman", "Microsoft AI, Inflection AI"),
            ("Fei-Fei Li", "World Labs, Stanford HAI"),
        ],
    ),
    (
        "App & SaaS",
        &[
            ("Marc Benioff", "Salesforce"),
            ("Tobi Lutke", "Shopify"),
            ("Daniel Ek", "Spotify"),
            ("Melanie Perkins", "Canva"),
            ("Stewart Butterfield", "Slack, Flickr"),
        ],
    ),
    (
        "Authors",
        &[
            ("Jim Collins", "Good to Great"),
            ("Simon Sinek", "Start with Why"),
            ("Ray Dalio", "Principles, Bridgewater Associates"),
            ("Adam Grant", "Think Again, Originals"),
            ("Morgan Housel", "The Psychology of Money"),
        ],
    ),
    (
        "Biotech & Life Sciences",
        &[
            ("Stephane Bancel", "Moderna"),
            ("Ugur Sahin", "BioNTech"),
            ("Anne Wojcicki", "23andMe"),
            ("Vas Narasimhan", "Novartis"),
            ("Albert Bourla", "Pfizer"),
        ],
    ),
    (
        "Consumer Tech",
        &[
            ("Tim Cook", "Apple"),
            ("Lei Jun", "Xiaomi"),
            ("Carl Pei", "Nothing, OnePlus"),
            ("Lisa Su", "AMD"),
            ("Satya Nadella", "Microsoft"),
        ],
    ),
    (
        "Content Creator",
        &[
            ("MrBeast", "Beast Industries, Feastables"),
            ("Marques Brownlee", "MKBHD"),
            ("Casey Neistat", "368, Beme"),
            ("Emma Chamberlain", "Chamberlain Coffee"),
            ("Ali Abdaal", "Ali Abdaal Productivity"),
        ],
    ),
    (
        "Crypto & Web3",
        &[
            ("Vitalik Buterin", "Ethereum"),
            ("Brian Armstrong", "Coinbase"),
            ("Changpeng Zhao", "Former CEO Binance"),
            ("Michael Saylor", "MicroStrategy"),
            ("Jeremy Allaire", "Circle"),
        ],
    ),
    (
        "E-Commerce & Retail",
        &[
            ("Jeff Bezos", "Amazon, Blue Origin"),
            ("Jack Ma", "Alibaba Group"),
            ("Andy Jassy", "Amazon"),
            ("Colin Huang", "PDD Holdings, Temu"),
            ("Doug McMillon", "Walmart"),
        ],
    ),
    (
        "Digital Marketing",
        &[
            ("Gary Vaynerchuk", "VaynerMedia, VaynerX"),
            ("Neil Patel", "NP Digital"),
            ("Seth Godin", "Purple Cow, altMBA"),
            ("Rand Fishkin", "SparkToro, Moz"),
            ("Ann Handley", "MarketingProfs"),
        ],
    ),
    (
        "Filmmakers",
        &[
            ("Christopher Nolan", "Syncopy"),
            ("Steven Spielberg", "Amblin Entertainment, DreamWorks"),
            ("James Cameron", "Lightstorm Entertainment"),
            ("Greta Gerwig", "Barbie, Lady Bird"),
            ("Bong Joon-ho", "Parasite"),
        ],
    ),
    (
        "Finance & VC",
        &[
            ("Warren Buffett", "Berkshire Hathaway"),
            ("Jamie Dimon", "JPMorgan Chase"),
            ("Larry Fink", "BlackRock"),
            ("Marc Andreessen", "Andreessen Horowitz"),
            ("Cathie Wood", "ARK Invest"),
            ("Masayoshi Son", "SoftBank Group"),
        ],
    ),
    (
        "Energy & Cleantech",
        &[
            ("Bill Gates", "Breakthrough Energy, TerraPower"),
            ("Andrew Forrest", "Fortescue"),
            ("Zeng Yuqun", "CATL"),
            ("Patrick Pouyanne", "TotalEnergies"),
            ("Peter Carlsson", "Former CEO Northvolt"),
        ],
    ),
    (
        "EV & Mobility",
        &[
            ("Elon Musk", "Tesla, SpaceX"),
            ("Wang Chuanfu", "BYD"),
            ("RJ Scaringe", "Rivian"),
            ("William Li", "NIO"),
            ("Mary Barra", "General Motors"),
        ],
    ),
    (
        "Cybersecurity & Defense",
        &[
            ("George Kurtz", "CrowdStrike"),
            ("Palmer Luckey", "Anduril Industries"),
            ("Alex Karp", "Palantir Technologies"),
            ("Nikesh Arora", "Palo Alto Networks"),
            ("Eugene Kaspersky", "Kaspersky"),
        ],
    ),
    (
        "Media & Entertainment",
        &[
            ("Bob Iger", "The Walt Disney Company"),
            ("Reed Hastings", "Netflix"),
            ("Ted Sarandos", "Netflix"),
            ("Oprah Winfrey", "Harpo Productions, OWN"),
            ("David Zaslav", "Warner Bros. Discovery"),
        ],
    ),
    (
        "Gaming & Esports",
        &[
            ("Gabe Newell", "Valve"),
            ("Tim Sweeney", "Epic Games"),
            ("Shuntaro Furukawa", "Nintendo"),
            ("Phil Spencer", "Xbox"),
            ("Pony Ma", "Tencent"),
        ],
    ),
    (
        "Real Estate & PropTech",
        &[
            ("Stephen Schwarzman", "Blackstone"),
            ("Rich Barton", "Zillow"),
            ("Adam Neumann", "Flow, Former CEO WeWork"),
            ("Sam Zell", "Equity Group Investments"),
            ("Barry Sternlicht", "Starwood Capital Group"),
        ],
    ),
    (
        "FoodTech & Agriculture",
        &[
            ("Ethan Brown", "Beyond Meat"),
            ("Patrick Brown", "Impossible Foods"),
            ("Josh Tetrick", "Eat Just"),
            ("Ertharin Cousin", "Food Systems for the Future"),
            ("Ingrid Newkirk", "PETA"),
        ],
    ),
    (
        "Healthcare & Medical Devices",
        &[
            ("Joaquin Duato", "Johnson & Johnson"),
            ("Geoff Martha", "Medtronic"),
            ("Andrew Witty", "UnitedHealth Group"),
            ("Kevin Lobo", "Stryker"),
            ("Gary Guthart", "Intuitive Surgical"),
        ],
    ),
    (
        "Telecom & Semiconductors",
        &[
            ("C. C. Wei", "TSMC"),
            ("Cristiano Amon", "Qualcomm"),
            ("Hock Tan", "Broadcom"),
            ("Pat Gelsinger", "Former CEO Intel"),
            ("Ren Zhengfei", "Huawei"),
        ],
    ),
    (
        "Logistics & Supply Chain",
        &[
            ("Fred Smith", "FedEx"),
            ("Carol Tome", "UPS"),
            ("Vincent Clerc", "Maersk"),
            ("Ryan Petersen", "Flexport"),
            ("Wang Wei", "SF Express"),
        ],
    ),
    (
        "Manufacturing & Robotics",
        &[
            ("Terry Gou", "Foxconn"),
            ("Marc Raibert", "Boston Dynamics"),
            ("Akio Toyoda", "Toyota"),
            ("Brett Adcock", "Figure AI"),
            ("Rodney Brooks", "iRobot, Rethink Robotics"),
        ],
    ),
    (
        "Luxury & Lifestyle",
        &[
            ("Bernard Arnault", "LVMH"),
            ("Francois-Henri Pinault", "Kering"),
            ("Johann Rupert", "Richemont"),
            ("Axel Dumas", "Hermes"),
            ("Leena Nair", "Chanel"),
        ],
    ),
    (
        "Travel & Hospitality",
        &[
            ("Brian Chesky", "Airbnb"),
            ("Richard Branson", "Virgin Group"),
            ("Christopher Nassetta", "Hilton"),
            ("Glenn Fogel", "Booking Holdings"),
            ("Tony Fernandes", "AirAsia, Capital A"),
        ],
    ),
    (
        "EdTech & Creator Economy",
        &[
            ("Sal Khan", "Khan Academy"),
            ("Luis von Ahn", "Duolingo"),
            ("Byju Raveendran", "BYJU'S"),
            ("Jeff Maggioncalda", "Coursera"),
            ("Jack Conte", "Patreon"),
        ],
    ),
    (
        "Information Product",
        &[
            ("Tony Robbins", "Robbins Research International"),
            ("Tim Ferriss", "The 4-Hour Workweek"),
            ("Russell Brunson", "ClickFunnels"),
            ("Alex Hormozi", "Acquisition.com"),
            ("Robert Kiyosaki", "Rich Dad Poor Dad"),
        ],
    ),
    (
        "Sports & Athletics",
        &[
            ("Michael Jordan", "Jordan Brand, Charlotte Hornets"),
            ("LeBron James", "SpringHill Company"),
            ("Cristiano Ronaldo", "CR7"),
            ("Serena Williams", "Serena Ventures"),
            ("Phil Knight", "Nike"),
        ],
    ),
    (
        "Stars & Artists",
        &[
            ("Taylor Swift", "Taylor Swift Productions"),
            ("Rihanna", "Fenty Beauty, Savage X Fenty"),
            ("Jay-Z", "Roc Nation"),
            ("Kim Kardashian", "SKIMS, SKKY Partners"),
            ("Ryan Reynolds", "Maximum Effort, Mint Mobile"),
        ],
    ),
];

#[cfg(test)]
#[path = "tests/dataset_tests.rs"]
mod tests;
