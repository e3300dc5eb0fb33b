//! Demo records the portal starts with when no fixture file is configured.

use crate::contract::{Contract, ContractStatus, ServiceType};
use crate::employee::{Employee, EmployeeStatus};
use crate::invoice::{DEFAULT_VAT_RATE, Invoice, InvoiceLine, InvoiceStatus};
use crate::product::{Product, ProductCategory};
use crate::shift::{Shift, ShiftPriority, ShiftStatus};
use crate::store::{Dataset, PortalStore, StoreResult};
use chrono::{NaiveDate, NaiveTime};

fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap_or(NaiveTime::MIN)
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    date(y, m, d).unwrap_or_default()
}

pub fn demo_employees() -> Vec<Employee> {
    vec![
        Employee::new(1, "Lars Hansen", "Team Lead")
            .with_skills(["office cleaning", "floor care", "team management"])
            .with_email("lars.hansen@cleantech.no")
            .with_hourly_rate(320.0),
        Employee::new(2, "Ingrid Olsen", "Cleaner")
            .with_skills(["office cleaning", "window cleaning"])
            .with_email("ingrid.olsen@cleantech.no")
            .with_hourly_rate(245.0),
        Employee::new(3, "Ahmed Nilsen", "Cleaner")
            .with_skills(["deep cleaning", "sanitation"])
            .with_status(EmployeeStatus::Busy)
            .with_email("ahmed.nilsen@cleantech.no")
            .with_hourly_rate(245.0),
        Employee::new(4, "Sofie Berg", "Window Specialist")
            .with_skills(["window cleaning", "high-rise"])
            .with_email("sofie.berg@cleantech.no")
            .with_hourly_rate(285.0),
        Employee::new(5, "Maria Johansen", "Cleaner")
            .with_skills(["residential", "office cleaning"])
            .with_status(EmployeeStatus::OnLeave)
            .with_email("maria.johansen@cleantech.no")
            .with_hourly_rate(240.0),
        Employee::new(6, "Erik Larsen", "Floor Technician")
            .with_skills(["floor care", "machine operation"])
            .with_status(EmployeeStatus::OffDuty)
            .with_email("erik.larsen@cleantech.no")
            .with_hourly_rate(275.0),
    ]
}

pub fn demo_shifts() -> Vec<Shift> {
    let mut shifts = vec![
        Shift::new(1, "Morning office cleaning", date(2024, 1, 15), time(8, 0), time(12, 0))
            .at("Karl Johans gate 1, Oslo")
            .with_employees([1, 2])
            .with_status(ShiftStatus::Completed),
        Shift::new(2, "Window cleaning", date(2024, 1, 15), time(13, 0), time(16, 30))
            .at("Karl Johans gate 1, Oslo")
            .with_employees([4])
            .with_status(ShiftStatus::Completed)
            .with_priority(ShiftPriority::High),
        Shift::new(3, "Hotel deep clean", date(2024, 1, 16), time(9, 0), time(17, 0))
            .at("Bryggen 5, Bergen")
            .with_employees([3])
            .with_status(ShiftStatus::InProgress),
        Shift::new(4, "School evening clean", date(2024, 1, 17), time(16, 0), time(20, 0))
            .at("Hagegata 24, Oslo")
            .with_employees([1, 2])
            .with_status(ShiftStatus::Scheduled),
        Shift::new(5, "Clinic night sanitation", date(2024, 1, 17), time(22, 0), time(2, 0))
            .at("Prinsens gate 10, Trondheim")
            .with_employees([3])
            .with_status(ShiftStatus::Scheduled)
            .with_priority(ShiftPriority::Urgent),
        Shift::new(6, "Floor polishing", date(2024, 1, 18), time(7, 30), time(11, 0))
            .at("Hagegata 24, Oslo")
            .with_employees([6])
            .with_status(ShiftStatus::Pending)
            .with_priority(ShiftPriority::Low),
        Shift::new(7, "Weekend office reset", date(2024, 1, 20), time(10, 0), time(14, 0))
            .at("Karl Johans gate 1, Oslo")
            .with_employees([2, 4])
            .with_status(ShiftStatus::Cancelled),
        Shift::new(8, "Move-out cleaning", None, time(9, 0), time(13, 0))
            .at("Storgata 3, Drammen")
            .with_status(ShiftStatus::Pending),
    ];
    shifts[0].contract_id = Some(1);
    shifts[1].contract_id = Some(1);
    shifts[3].contract_id = Some(2);
    shifts[4].notes = Some("Access card at reception".into());
    shifts
}

pub fn demo_contracts() -> Vec<Contract> {
    vec![
        Contract {
            id: 1,
            contract_number: "CT-2024-001".into(),
            client_name: "Nordic Office Park".into(),
            client_address: "Karl Johans gate 1, 0154 Oslo".into(),
            service_type: ServiceType::OfficeCleaning,
            status: ContractStatus::Active,
            start_date: day(2023, 6, 1),
            end_date: Some(day(2025, 5, 31)),
            monthly_value: 45_000.0,
        },
        Contract {
            id: 2,
            contract_number: "CT-2024-002".into(),
            client_name: "Oslo Kommune Skoleetat".into(),
            client_address: "Hagegata 24, 0653 Oslo".into(),
            service_type: ServiceType::FloorCare,
            status: ContractStatus::Active,
            start_date: day(2024, 1, 1),
            end_date: None,
            monthly_value: 32_500.0,
        },
        Contract {
            id: 3,
            contract_number: "CT-2023-014".into(),
            client_name: "Bryggen Hotell".into(),
            client_address: "Bryggen 5, 5003 Bergen".into(),
            service_type: ServiceType::DeepCleaning,
            status: ContractStatus::Expired,
            start_date: day(2023, 1, 1),
            end_date: Some(day(2023, 12, 31)),
            monthly_value: 28_000.0,
        },
        Contract {
            id: 4,
            contract_number: "CT-2024-003".into(),
            client_name: "Trondheim Helseklinikk".into(),
            client_address: "Prinsens gate 10, 7012 Trondheim".into(),
            service_type: ServiceType::DeepCleaning,
            status: ContractStatus::Draft,
            start_date: day(2024, 2, 1),
            end_date: None,
            monthly_value: 19_900.0,
        },
    ]
}

pub fn demo_invoices() -> Vec<Invoice> {
    vec![
        Invoice {
            id: 1,
            number: "INV-2024-0001".into(),
            client_name: "Nordic Office Park".into(),
            issue_date: day(2024, 1, 1),
            due_date: day(2024, 1, 15),
            status: InvoiceStatus::Paid,
            lines: vec![InvoiceLine::new("Office cleaning, December", 1.0, 45_000.0)],
            vat_rate: DEFAULT_VAT_RATE,
        },
        Invoice {
            id: 2,
            number: "INV-2024-0002".into(),
            client_name: "Oslo Kommune Skoleetat".into(),
            issue_date: day(2024, 1, 2),
            due_date: day(2024, 1, 16),
            status: InvoiceStatus::Sent,
            lines: vec![
                InvoiceLine::new("Floor care, January", 1.0, 32_500.0),
                InvoiceLine::new("Extra evening hours", 6.0, 450.0),
            ],
            vat_rate: DEFAULT_VAT_RATE,
        },
        Invoice {
            id: 3,
            number: "INV-2024-0003".into(),
            client_name: "Bryggen Hotell".into(),
            issue_date: day(2024, 1, 5),
            due_date: day(2024, 2, 4),
            status: InvoiceStatus::Draft,
            lines: vec![InvoiceLine::new("Deep clean, 2 floors", 16.0, 520.0)],
            vat_rate: DEFAULT_VAT_RATE,
        },
    ]
}

pub fn demo_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Multi-surface cleaner 5L".into(),
            description: "Eco-labelled all-purpose concentrate".into(),
            category: ProductCategory::CleaningAgents,
            price: 349.0,
            stock: 40,
        },
        Product {
            id: 2,
            name: "Microfibre mop set".into(),
            description: "Flat mop with 4 washable pads".into(),
            category: ProductCategory::Equipment,
            price: 899.0,
            stock: 12,
        },
        Product {
            id: 3,
            name: "Nitrile gloves (100)".into(),
            description: "Powder-free, size M".into(),
            category: ProductCategory::ProtectiveGear,
            price: 129.0,
            stock: 0,
        },
        Product {
            id: 4,
            name: "Paper towel rolls (24)".into(),
            description: "Two-ply, for dispensers".into(),
            category: ProductCategory::Consumables,
            price: 259.0,
            stock: 75,
        },
    ]
}

pub fn demo_dataset() -> Dataset {
    Dataset {
        employees: demo_employees(),
        shifts: demo_shifts(),
        contracts: demo_contracts(),
        invoices: demo_invoices(),
        products: demo_products(),
    }
}

pub fn demo_store() -> StoreResult<PortalStore> {
    PortalStore::from_dataset(demo_dataset())
}
