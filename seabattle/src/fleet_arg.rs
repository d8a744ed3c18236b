// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Parsing of the `--fleet` argument.
use fleetyard::fleet::{FleetConfig, ShipClass};
use once_cell::sync::Lazy;
use regex::Regex;

/// One `<kind>:<length>x<count>` entry of the `--fleet` argument.
static CLASS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?x)
        (?P<kind>[a-z][a-z0-9_]*)\s*:\s*
        (?P<length>[0-9]+)\s*[x*]\s*
        (?P<count>[0-9]+)$",
    )
    .unwrap()
});

/// Parse a comma separated list of ship classes, e.g. `battleship:4x1,destroyer:3x2`.
pub fn parse(arg: &str) -> Result<FleetConfig, String> {
    let mut classes = Vec::new();
    for entry in arg.split(',').map(str::trim).filter(|entry| !entry.is_empty()) {
        let lower = entry.to_ascii_lowercase();
        let captures = CLASS.captures(&lower).ok_or_else(|| {
            format!(
                "invalid ship class \"{}\", expected <name>:<length>x<count>",
                entry
            )
        })?;
        let number = |name: &str| {
            captures[name]
                .parse::<usize>()
                .map_err(|_| format!("{} of \"{}\" is too large", name, entry))
        };
        classes.push(ShipClass::new(
            &captures["kind"],
            number("length")?,
            number("count")?,
        ));
    }
    FleetConfig::new(classes).map_err(|err| err.to_string())
}

/// Adapter for clap's `validator`.
pub fn validate(arg: String) -> Result<(), String> {
    parse(&arg).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_classes_in_order() {
        let config = parse("Battleship:4x1, destroyer : 3 x 2,").unwrap();
        let classes = config.classes();
        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0], ShipClass::new("battleship", 4, 1));
        assert_eq!(classes[1], ShipClass::new("destroyer", 3, 2));
    }

    #[test]
    fn rejects_malformed_classes() {
        assert!(parse("").is_err());
        assert!(parse("battleship").is_err());
        assert!(parse("battleship:4").is_err());
        assert!(parse("raft:0x1").is_err());
        assert!(parse("ghost:2x0").is_err());
        assert!(parse("4:4x1").is_err());
    }
}
