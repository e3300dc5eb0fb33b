use chrono::NaiveDate;
use mopp_schedule::{
    CalendarGrid, Credentials, DashboardSummary, Language, LanguagePreference, ListFilter,
    MemoryKeyValueStore, PortalConfig, PortalStore, ProductCategory, Repository, ScheduleAction,
    ScheduleViewState, Shift, ShiftStatus, ViewMode, WorkCalendar, find_conflicts, grid,
    load_dataset_from_json, load_shifts_from_csv, logging, mock, payroll, reduce, report,
    shifts_in_slot,
};
use std::collections::BTreeSet;
use std::io::{self, Write};

fn render_row<'a>(widths: &[usize], cells: impl Iterator<Item = &'a str>) -> String {
    let mut line = String::from("|");
    for (ci, cell) in cells.enumerate() {
        line.push(' ');
        line.push_str(cell);
        let pad = widths[ci].saturating_sub(cell.chars().count());
        line.push_str(&" ".repeat(pad));
        line.push_str(" |");
    }
    line
}

fn render_text_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (ci, cell) in row.iter().enumerate() {
            if ci < widths.len() && cell.chars().count() > widths[ci] {
                widths[ci] = cell.chars().count();
            }
        }
    }

    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&render_row(&widths, headers.iter().copied()));
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');
    for row in rows {
        out.push_str(&render_row(&widths, row.iter().map(String::as_str)));
        out.push('\n');
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn shift_rows<'a>(shifts: impl IntoIterator<Item = &'a Shift>) -> Vec<Vec<String>> {
    shifts
        .into_iter()
        .map(|shift| {
            vec![
                shift.id.to_string(),
                shift.title.clone(),
                shift.date.map(|d| d.to_string()).unwrap_or_default(),
                format!(
                    "{}-{}",
                    shift.start_time.format("%H:%M"),
                    shift.end_time.format("%H:%M")
                ),
                shift.location.clone(),
                shift.status.to_string(),
                shift.priority.to_string(),
                shift
                    .assigned_employees
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(","),
            ]
        })
        .collect()
}

const SHIFT_HEADERS: [&str; 8] = [
    "id", "title", "date", "time", "location", "status", "priority", "staff",
];

/// Hour rows for day/week views (only hours with shifts), a per-day count for month views.
fn render_grid(grid: &CalendarGrid, mode: ViewMode) -> String {
    if mode == ViewMode::Month {
        let rows: Vec<Vec<String>> = grid
            .days
            .iter()
            .filter(|day| day.in_anchor_month)
            .map(|day| {
                let ids: BTreeSet<u32> = grid
                    .cells
                    .iter()
                    .filter(|cell| cell.date == day.date)
                    .flat_map(|cell| cell.shift_ids.iter().copied())
                    .collect();
                vec![
                    day.date.to_string(),
                    day.weekday.to_string(),
                    day.holiday.clone().unwrap_or_default(),
                    ids.len().to_string(),
                ]
            })
            .collect();
        return render_text_table(&["date", "day", "holiday", "shifts"], &rows);
    }

    let mut headers = vec!["hour".to_string()];
    headers.extend(
        grid.days
            .iter()
            .map(|day| format!("{} {}", day.weekday, day.date.format("%d.%m"))),
    );
    let mut rows = Vec::new();
    for hour in 0..mopp_schedule::projector::HOURS_PER_DAY {
        let cells: Vec<String> = grid
            .days
            .iter()
            .map(|day| {
                grid.cell(day.date, hour)
                    .map(|cell| {
                        cell.shift_ids
                            .iter()
                            .map(|id| format!("#{id}"))
                            .collect::<Vec<_>>()
                            .join(" ")
                    })
                    .unwrap_or_default()
            })
            .collect();
        if cells.iter().all(String::is_empty) {
            continue;
        }
        let mut row = vec![format!("{hour:02}:00")];
        row.extend(cells);
        rows.push(row);
    }
    if rows.is_empty() {
        return "No shifts in view.\n".to_string();
    }
    let header_refs: Vec<&str> = headers.iter().map(String::as_str).collect();
    render_text_table(&header_refs, &rows)
}

fn parse_date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  day|week|month <YYYY-MM-DD>        Show the calendar grid for a date\n  next | prev                        Move the calendar one view forward/back\n  slot <YYYY-MM-DD> <hour>           List shifts occupying an hour cell\n  shifts                             List shifts matching the current filter\n  search [term...]                   Set (or clear) the shift search term\n  filter <status|all>                Filter shifts by status\n  status <id> <status>               Change a shift's status\n  employees [term...]                List employees\n  contracts [term...]                List contracts\n  invoices                           List invoices with totals\n  products [category]                List marketplace products\n  conflicts                          Report double-booked employees\n  payroll <start> <end>              Payroll for completed shifts in a date range\n  dashboard <YYYY-MM-DD>             Summary for a day\n  workload                           Planned hours per employee\n  login <email> <password> [code]    Check credentials\n  lang <code>                        Select language (en, no, pt, fr, sv, da)\n  t <key>                            Translate a UI key\n  load json <path>                   Load fixtures from a JSON file\n  load csv <path>                    Replace shifts from a CSV file\n  quit|exit                          Exit"
    );
}

fn show_grid(view: &ScheduleViewState, store: &PortalStore, calendar: &WorkCalendar) {
    let shifts = store.shifts.list();
    let grid = view.render(&shifts, calendar);
    let days = grid::visible_days(view.anchor, view.mode);
    if let (Some(first), Some(last)) = (days.first(), days.last()) {
        println!("{} view {} .. {}", view.mode, first, last);
    }
    print!("{}", render_grid(&grid, view.mode));
}

fn main() {
    let config = match PortalConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            std::process::exit(2);
        }
    };
    logging::init_tracing(config.log_json);

    let loaded = match &config.fixtures {
        Some(path) => load_dataset_from_json(path),
        None => mock::demo_store(),
    };
    let mut store = match loaded {
        Ok(store) => store,
        Err(err) => {
            eprintln!("could not load fixtures: {err}");
            std::process::exit(1);
        }
    };

    let calendar = WorkCalendar::default();
    let credentials = mopp_schedule::CredentialTable::demo();
    let mut language = LanguagePreference::resolve(
        MemoryKeyValueStore::default(),
        None,
        config.default_language,
    );
    let mut view = ScheduleViewState::new(chrono::Local::now().date_naive());

    println!("MOPP Scheduling (CLI) - type 'help' for commands\n");

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "day" | "week" | "month" => {
                let Ok(mode) = cmd.parse::<ViewMode>() else {
                    continue;
                };
                match parse_date(parts.next()) {
                    Some(date) => {
                        view = reduce(&view, ScheduleAction::SetMode(mode));
                        view = reduce(&view, ScheduleAction::GoTo(date));
                        show_grid(&view, &store, &calendar);
                    }
                    None => println!("Usage: {cmd} <YYYY-MM-DD>"),
                }
            }
            "next" | "prev" => {
                let action = if cmd == "next" {
                    ScheduleAction::Next
                } else {
                    ScheduleAction::Previous
                };
                view = reduce(&view, action);
                show_grid(&view, &store, &calendar);
            }
            "slot" => {
                let date = parse_date(parts.next());
                let hour = parts.next().and_then(|h| h.parse::<u32>().ok());
                match (date, hour) {
                    (Some(date), Some(hour)) if hour < 24 => {
                        let hits = shifts_in_slot(store.shifts.iter(), date, hour);
                        if hits.is_empty() {
                            println!("No shifts at {date} {hour:02}:00.");
                        } else {
                            print!("{}", render_text_table(&SHIFT_HEADERS, &shift_rows(hits)));
                        }
                    }
                    _ => println!("Usage: slot <YYYY-MM-DD> <hour 0-23>"),
                }
            }
            "shifts" => {
                let filter = view.filter();
                let shifts = filter.apply(store.shifts.iter());
                print!("{}", render_text_table(&SHIFT_HEADERS, &shift_rows(shifts)));
            }
            "search" => {
                let term = parts.collect::<Vec<_>>().join(" ");
                view = reduce(&view, ScheduleAction::Search(term.clone()));
                if term.is_empty() {
                    println!("Search cleared.");
                } else {
                    println!("Searching shifts for '{term}'.");
                }
            }
            "filter" => match parts.next() {
                Some("all") => {
                    view = reduce(&view, ScheduleAction::FilterStatus(None));
                    println!("Status filter cleared.");
                }
                Some(raw) => match raw.parse::<ShiftStatus>() {
                    Ok(status) => {
                        view = reduce(&view, ScheduleAction::FilterStatus(Some(status)));
                        println!("Showing {status} shifts.");
                    }
                    Err(e) => println!("Error: {e}"),
                },
                None => println!("Usage: filter <status|all>"),
            },
            "status" => {
                let id = parts.next().and_then(|s| s.parse::<u32>().ok());
                let status = parts.next().map(str::parse::<ShiftStatus>);
                match (id, status) {
                    (Some(id), Some(Ok(status))) => match store.set_shift_status(id, status) {
                        Ok(shift) => println!("Shift {} is now {}.", shift.id, shift.status),
                        Err(e) => println!("Error: {e}"),
                    },
                    (_, Some(Err(e))) => println!("Error: {e}"),
                    _ => println!("Usage: status <id> <status>"),
                }
            }
            "employees" => {
                let filter = ListFilter::search(parts.collect::<Vec<_>>().join(" "));
                let rows: Vec<Vec<String>> = filter
                    .apply(store.employees.iter())
                    .into_iter()
                    .map(|e| {
                        vec![
                            e.id.to_string(),
                            e.name.clone(),
                            e.role.clone(),
                            e.status.to_string(),
                            e.skills.iter().cloned().collect::<Vec<_>>().join(", "),
                        ]
                    })
                    .collect();
                print!(
                    "{}",
                    render_text_table(&["id", "name", "role", "status", "skills"], &rows)
                );
            }
            "contracts" => {
                let filter = ListFilter::search(parts.collect::<Vec<_>>().join(" "));
                let rows: Vec<Vec<String>> = filter
                    .apply(store.contracts.iter())
                    .into_iter()
                    .map(|c| {
                        vec![
                            c.contract_number.clone(),
                            c.client_name.clone(),
                            c.client_address.clone(),
                            c.status.to_string(),
                            format!("{:.2}", c.monthly_value),
                        ]
                    })
                    .collect();
                print!(
                    "{}",
                    render_text_table(&["number", "client", "address", "status", "monthly"], &rows)
                );
            }
            "invoices" => {
                let rows: Vec<Vec<String>> = store
                    .invoices
                    .iter()
                    .map(|i| {
                        vec![
                            i.number.clone(),
                            i.client_name.clone(),
                            i.due_date.to_string(),
                            i.status.to_string(),
                            format!("{:.2}", i.subtotal()),
                            format!("{:.2}", i.vat_amount()),
                            format!("{:.2}", i.total()),
                        ]
                    })
                    .collect();
                print!(
                    "{}",
                    render_text_table(
                        &["number", "client", "due", "status", "subtotal", "vat", "total"],
                        &rows
                    )
                );
            }
            "products" => {
                let category = match parts.next().map(str::parse::<ProductCategory>) {
                    Some(Ok(category)) => Some(category),
                    Some(Err(e)) => {
                        println!("Error: {e}");
                        continue;
                    }
                    None => None,
                };
                let filter = ListFilter::new("", category);
                let rows: Vec<Vec<String>> = filter
                    .apply(store.products.iter())
                    .into_iter()
                    .map(|p| {
                        vec![
                            p.id.to_string(),
                            p.name.clone(),
                            p.category.to_string(),
                            format!("{:.2}", p.price),
                            p.stock.to_string(),
                        ]
                    })
                    .collect();
                print!(
                    "{}",
                    render_text_table(&["id", "name", "category", "price", "stock"], &rows)
                );
            }
            "conflicts" => {
                let conflicts = find_conflicts(store.shifts.iter());
                if conflicts.is_empty() {
                    println!("No double bookings.");
                }
                for conflict in conflicts {
                    println!(
                        "Employee {} is booked on shifts {} and {}.",
                        conflict.employee_id, conflict.first_shift, conflict.second_shift
                    );
                }
            }
            "payroll" => match (parse_date(parts.next()), parse_date(parts.next())) {
                (Some(start), Some(end)) if start <= end => {
                    let lines = payroll::run_payroll(
                        &store.shifts.list(),
                        &store.employees.list(),
                        start,
                        end,
                    );
                    let rows: Vec<Vec<String>> = lines
                        .iter()
                        .map(|l| {
                            vec![
                                l.employee_name.clone(),
                                l.shift_count.to_string(),
                                format!("{:.2}", l.hours()),
                                format!("{:.2}", l.hourly_rate),
                                format!("{:.2}", l.gross_pay),
                            ]
                        })
                        .collect();
                    print!(
                        "{}",
                        render_text_table(&["employee", "shifts", "hours", "rate", "gross"], &rows)
                    );
                    println!("Total gross: {:.2}", payroll::payroll_total(&lines));
                }
                _ => println!("Usage: payroll <start YYYY-MM-DD> <end YYYY-MM-DD>"),
            },
            "dashboard" => match parse_date(parts.next()) {
                Some(day) => {
                    let summary = DashboardSummary::build(&store, &calendar, day);
                    println!("{}", summary.to_cli_summary());
                }
                None => println!("Usage: dashboard <YYYY-MM-DD>"),
            },
            "workload" => {
                match report::workload_by_employee(&store.shifts.list(), &store.employees.list())
                {
                    Ok(rows) => {
                        let rows: Vec<Vec<String>> = rows
                            .into_iter()
                            .map(|r| {
                                vec![
                                    r.employee_name,
                                    r.shift_count.to_string(),
                                    format!("{:.2}", r.total_hours),
                                ]
                            })
                            .collect();
                        print!(
                            "{}",
                            render_text_table(&["employee", "shifts", "hours"], &rows)
                        );
                    }
                    Err(e) => println!("Report error: {e}"),
                }
            }
            "login" => {
                let email = parts.next();
                let password = parts.next();
                match (email, password) {
                    (Some(email), Some(password)) => {
                        let mut creds = Credentials::new(email, password);
                        if let Some(code) = parts.next() {
                            creds = creds.with_company_code(code);
                        }
                        match credentials.login(&creds) {
                            Ok(success) => println!(
                                "Logged in as {} ({}).",
                                success.profile.name, success.user_type
                            ),
                            Err(e) => println!("{e}"),
                        }
                    }
                    _ => println!("Usage: login <email> <password> [company_code]"),
                }
            }
            "lang" => match parts.next().map(str::parse::<Language>) {
                Some(Ok(selected)) => {
                    language.select(selected);
                    println!("Language set to {}.", selected.native_name());
                }
                Some(Err(e)) => println!("Error: {e}"),
                None => println!("Current language: {}", language.current()),
            },
            "t" => match parts.next() {
                Some(key) => println!("{}", language.translator().translate(key)),
                None => println!("Usage: t <key>"),
            },
            "load" => {
                let kind = parts.next();
                let path = parts.next();
                match (kind, path) {
                    (Some("json"), Some(path)) => match load_dataset_from_json(path) {
                        Ok(loaded) => {
                            store = loaded;
                            println!("Fixtures loaded from {path}.");
                        }
                        Err(e) => println!("Load error: {e}"),
                    },
                    (Some("csv"), Some(path)) => {
                        match load_shifts_from_csv(path).and_then(|s| store.replace_shifts(s)) {
                            Ok(()) => println!("Shifts loaded from {path}."),
                            Err(e) => println!("Load error: {e}"),
                        }
                    }
                    _ => println!("Usage: load <json|csv> <path>"),
                }
            }
            _ => println!("Unknown command. Type 'help'."),
        }
    }
}
