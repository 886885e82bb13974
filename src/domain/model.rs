use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::PatternError;

/// Identity tag of a concrete product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductKind {
    A,
    B,
}

impl ProductKind {
    pub fn type_name(self) -> &'static str {
        match self {
            ProductKind::A => "ConcreteProductA",
            ProductKind::B => "ConcreteProductB",
        }
    }
}

/// Demonstrations the shell exposes as buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Demo {
    Facade,
    FactoryMethod,
    Singleton,
}

impl Demo {
    pub const ALL: [Demo; 3] = [Demo::Facade, Demo::FactoryMethod, Demo::Singleton];

    pub fn as_str(self) -> &'static str {
        match self {
            Demo::Facade => "facade",
            Demo::FactoryMethod => "factory-method",
            Demo::Singleton => "singleton",
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Demo {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "facade" => Ok(Demo::Facade),
            "factory-method" | "factory_method" | "factory" => Ok(Demo::FactoryMethod),
            "singleton" => Ok(Demo::Singleton),
            _ => Err(PatternError::invalid_value(
                "demo",
                s,
                "expected one of: facade, factory-method, singleton",
            )),
        }
    }
}

/// One observable interaction with an output sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    Message(String),
    WaitForInput,
}
