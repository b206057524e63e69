// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hand-rolled subcommand dispatch over `std::env::args()` — the only
//! in-scope CLI surface is `day YYYY-MM-DD --engine NAME [--debug]
//! [--attr NAME]*`. No argument-parsing dependency, matching the
//! teacher's own dependency-free `main.rs`.

use crate::api;
use crate::calendar::GregorianDate;
use crate::spec::Registry;

pub fn run(args: &[String]) -> Result<String, String> {
    match args.first().map(String::as_str) {
        Some("day") => run_day(&args[1..]),
        Some(other) => Err(format!("unknown subcommand '{other}'")),
        None => Err("usage: day YYYY-MM-DD --engine NAME [--debug] [--attr NAME]*".to_string()),
    }
}

fn run_day(args: &[String]) -> Result<String, String> {
    let date_str = args.first().ok_or("missing YYYY-MM-DD date")?;
    let date = parse_date(date_str)?;

    let mut engine_name: Option<&str> = None;
    let mut debug = false;
    let mut attrs = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--engine" => {
                i += 1;
                engine_name = Some(args.get(i).ok_or("--engine requires a value")?);
            }
            "--debug" => debug = true,
            "--attr" => {
                i += 1;
                attrs.push(args.get(i).ok_or("--attr requires a value")?.clone());
            }
            other => return Err(format!("unrecognized flag '{other}'")),
        }
        i += 1;
    }
    let engine_name = engine_name.ok_or("--engine NAME is required")?;

    let reg = crate::spec::build_registry();
    render(&reg, engine_name, date, debug, &attrs)
}

fn render(reg: &Registry, engine_name: &str, date: GregorianDate, debug: bool, attrs: &[String]) -> Result<String, String> {
    let info = api::day_info(reg, engine_name, date, debug).map_err(|e| e.to_string())?;
    let mut out = format!("{info}");
    if !attrs.is_empty() {
        for attr in attrs {
            out.push_str(&format!("\n  {attr}: {}", attr_value(&info, attr)));
        }
    }
    Ok(out)
}

fn attr_value(info: &crate::calendar::DayInfo, attr: &str) -> String {
    match attr {
        "year" => info.tibetan.tib_year.to_string(),
        "month" => info.tibetan.month_no.to_string(),
        "is_leap_month" => info.tibetan.is_leap_month.to_string(),
        "tithi" => info.tibetan.tithi.to_string(),
        "occ" => info.tibetan.occ.to_string(),
        "status" => format!("{:?}", info.status),
        _ => "unknown attr".to_string(),
    }
}

fn parse_date(s: &str) -> Result<GregorianDate, String> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("bad date '{s}', expected YYYY-MM-DD"));
    }
    let year: i32 = parts[0].parse().map_err(|_| format!("bad year in '{s}'"))?;
    let month: u8 = parts[1].parse().map_err(|_| format!("bad month in '{s}'"))?;
    let day: u8 = parts[2].parse().map_err(|_| format!("bad day in '{s}'"))?;
    GregorianDate::new(year, month, day).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_rejects_malformed_input() {
        assert!(parse_date("not-a-date").is_err());
        assert!(parse_date("2024-13-01").is_err());
    }

    #[test]
    fn parse_date_accepts_well_formed_input() {
        let d = parse_date("2024-03-07").unwrap();
        assert_eq!(d, GregorianDate::new(2024, 3, 7).unwrap());
    }

    #[test]
    fn missing_engine_flag_is_an_error() {
        let args = vec!["day".to_string(), "2024-03-07".to_string()];
        assert!(run(&args).is_err());
    }
}
