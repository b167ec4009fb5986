//! Sample data for a fresh database.

use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::info;

use pmajay_core::errors::Error;
use pmajay_core::users::{hash_password, UserRole};
use pmajay_core::Result;

use crate::agencies::NewAgencyDB;
use crate::db::WriteHandle;
use crate::errors::IntoCore;
use crate::projects::NewProjectDB;
use crate::schema::{agencies, projects, states, users};
use crate::states::NewStateDB;
use crate::users::NewUserDB;

const STATES: [(&str, &str); 6] = [
    ("Maharashtra", "MH"),
    ("Gujarat", "GJ"),
    ("Karnataka", "KA"),
    ("Tamil Nadu", "TN"),
    ("Uttar Pradesh", "UP"),
    ("Delhi", "DL"),
];

/// (name, type, contact, state index, roles)
const AGENCIES: [(&str, &str, &str, usize, &str); 4] = [
    (
        "Ministry of Rural Development",
        "implementing",
        "contact@rural.nic.in",
        0,
        "Central Government",
    ),
    (
        "Maharashtra Rural Development",
        "executing",
        "rd@mh.gov.in",
        0,
        "State Government",
    ),
    (
        "Gujarat Rural Development",
        "executing",
        "rd@gj.gov.in",
        1,
        "State Government",
    ),
    (
        "Karnataka Rural Development",
        "executing",
        "rd@ka.gov.in",
        2,
        "State Government",
    ),
];

struct SeedProject {
    title: &'static str,
    component: &'static str,
    state: usize,
    agencies: &'static [usize],
    budget_total: f64,
    budget_released: f64,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    coords: (f64, f64),
    progress: i32,
    description: &'static str,
}

const PROJECTS: [SeedProject; 4] = [
    SeedProject {
        title: "Adarsh Gram Scheme - Pune District",
        component: "AdarshGram",
        state: 0,
        agencies: &[0, 1],
        budget_total: 5_000_000.0,
        budget_released: 2_500_000.0,
        start: (2024, 1, 1),
        end: (2024, 12, 31),
        coords: (18.5204, 73.8567),
        progress: 45,
        description: "Development of model villages in Pune district",
    },
    SeedProject {
        title: "Girls and Boys Hostel - Ahmedabad",
        component: "Hostel",
        state: 1,
        agencies: &[0, 2],
        budget_total: 8_000_000.0,
        budget_released: 5_000_000.0,
        start: (2024, 2, 1),
        end: (2024, 11, 30),
        coords: (23.0225, 72.5714),
        progress: 60,
        description: "Construction of hostels for SC/ST students",
    },
    SeedProject {
        title: "Grant-in-Aid to NGOs - Bangalore",
        component: "GIA",
        state: 2,
        agencies: &[0, 3],
        budget_total: 3_000_000.0,
        budget_released: 1_500_000.0,
        start: (2024, 3, 1),
        end: (2024, 10, 31),
        coords: (12.9716, 77.5946),
        progress: 30,
        description: "Financial assistance to NGOs for welfare activities",
    },
    SeedProject {
        title: "Adarsh Gram Scheme - Chennai",
        component: "AdarshGram",
        state: 3,
        agencies: &[0],
        budget_total: 4_500_000.0,
        budget_released: 2_000_000.0,
        start: (2024, 1, 15),
        end: (2024, 12, 15),
        coords: (13.0827, 80.2707),
        progress: 35,
        description: "Development of model villages in Chennai region",
    },
];

/// (name, email, password, role, state index)
const USERS: [(&str, &str, &str, UserRole, Option<usize>); 3] = [
    ("Admin User", "admin@pmajay.gov.in", "admin123", UserRole::Central, None),
    (
        "Maharashtra Officer",
        "officer@mh.gov.in",
        "state123",
        UserRole::StateUser,
        Some(0),
    ),
    ("Public User", "citizen@example.com", "public123", UserRole::Public, None),
];

fn date((y, m, d): (i32, u32, u32)) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| Error::Unexpected(format!("invalid seed date {y}-{m}-{d}")))
}

/// Inserts the sample states, agencies, projects and users when the
/// `states` table is empty. Returns whether anything was written.
pub async fn seed_sample_data(writer: &WriteHandle) -> Result<bool> {
    let mut hashed_users = Vec::with_capacity(USERS.len());
    for (name, email, password, role, state) in USERS {
        hashed_users.push((name, email, hash_password(password)?, role, state));
    }

    let seeded = writer
        .exec(move |conn: &mut SqliteConnection| -> Result<bool> {
            let existing = states::table
                .count()
                .get_result::<i64>(conn)
                .into_core()?;
            if existing > 0 {
                return Ok(false);
            }

            let mut state_ids = Vec::with_capacity(STATES.len());
            for (name, code) in STATES {
                let id = diesel::insert_into(states::table)
                    .values(NewStateDB {
                        name: name.to_string(),
                        code: code.to_string(),
                    })
                    .returning(states::id)
                    .get_result::<i32>(conn)
                    .into_core()?;
                state_ids.push(id);
            }

            let mut agency_ids = Vec::with_capacity(AGENCIES.len());
            for (name, agency_type, contact, state, roles) in AGENCIES {
                let id = diesel::insert_into(agencies::table)
                    .values(NewAgencyDB {
                        name: name.to_string(),
                        agency_type: agency_type.to_string(),
                        contact: Some(contact.to_string()),
                        location: None,
                        state_id: Some(state_ids[state]),
                        roles: Some(roles.to_string()),
                        status: "active".to_string(),
                    })
                    .returning(agencies::id)
                    .get_result::<i32>(conn)
                    .into_core()?;
                agency_ids.push(id);
            }

            for p in &PROJECTS {
                let linked: Vec<i32> = p.agencies.iter().map(|i| agency_ids[*i]).collect();
                diesel::insert_into(projects::table)
                    .values(NewProjectDB {
                        title: p.title.to_string(),
                        component: p.component.to_string(),
                        state_id: state_ids[p.state],
                        agency_ids: serde_json::to_string(&linked)?,
                        budget_total: p.budget_total,
                        budget_released: p.budget_released,
                        start_date: date(p.start)?,
                        end_date: date(p.end)?,
                        status: "ongoing".to_string(),
                        latitude: Some(p.coords.0),
                        longitude: Some(p.coords.1),
                        progress_percent: p.progress,
                        description: Some(p.description.to_string()),
                    })
                    .execute(conn)
                    .into_core()?;
            }

            for (name, email, password_hash, role, state) in hashed_users {
                diesel::insert_into(users::table)
                    .values(NewUserDB {
                        name: name.to_string(),
                        email: email.to_string(),
                        password: password_hash,
                        role: role.as_str().to_string(),
                        state_id: state.map(|i| state_ids[i]),
                    })
                    .execute(conn)
                    .into_core()?;
            }
            Ok(true)
        })
        .await?;

    if seeded {
        info!(
            "Seeded {} states, {} agencies, {} projects, {} users",
            STATES.len(),
            AGENCIES.len(),
            PROJECTS.len(),
            USERS.len()
        );
    }
    Ok(seeded)
}
