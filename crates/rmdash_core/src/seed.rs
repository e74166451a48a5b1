//! Demo boot data.
//!
//! # Responsibility
//! - Provide the initial users, shipments, tasks, notes, pickup slot and
//!   mailbox messages the dashboard starts with.
//!
//! # Invariants
//! - All dates are relative to the `now` passed in.
//! - Seeded shipments split 2 ToDo / 1 InProgress / 3 Ready.

use crate::model::email::Email;
use crate::model::event::{CustomEvent, CustomEventKind};
use crate::model::note::Note;
use crate::model::shipment::{
    Attachment, AttachmentKind, Comment, Customer, Product, Shipment, ShipmentStatus,
};
use crate::model::task::{SubTask, Task};
use crate::model::user::{Priority, User};
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Initial contents for every collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedData {
    pub users: Vec<User>,
    pub shipments: Vec<Shipment>,
    pub tasks: Vec<Task>,
    pub notes: Vec<Note>,
    pub custom_events: Vec<CustomEvent>,
    /// Canned inbox for the offline mail provider.
    pub emails: Vec<Email>,
}

impl SeedData {
    /// No users and no records.
    pub fn empty() -> Self {
        Self {
            users: Vec::new(),
            shipments: Vec::new(),
            tasks: Vec::new(),
            notes: Vec::new(),
            custom_events: Vec::new(),
            emails: Vec::new(),
        }
    }
}

/// Builds the demo data set around `now`.
pub fn demo_seed(now: NaiveDateTime) -> SeedData {
    let users = vec![
        User::new("u1", "Mario Rossi", "https://picsum.photos/id/1005/100/100"),
        User::new("u2", "Luigi Verdi", "https://picsum.photos/id/1011/100/100"),
        User::new("u3", "Anna Bianchi", "https://picsum.photos/id/1027/100/100"),
    ];
    let [mario, luigi, anna] = [users[0].clone(), users[1].clone(), users[2].clone()];

    let shipments = vec![
        Shipment {
            id: "s1".into(),
            order_number: "RM-00123".into(),
            tracking_number: "1Z999AA10123456784".into(),
            customer: customer("Tech Solutions Srl", "Via Roma 1, Milano"),
            products: vec![
                product("p1", "Laptop Pro 15\"", 2),
                product("p2", "Mouse Wireless", 2),
            ],
            assigned_to: mario.clone(),
            due_date: days_from(now, 2),
            priority: Priority::High,
            status: ShipmentStatus::ToDo,
            attachments: vec![Attachment {
                id: "a1".into(),
                name: "bolla_123.pdf".into(),
                url: "#".into(),
                kind: AttachmentKind::Document,
            }],
            comments: vec![Comment {
                id: "c1".into(),
                author: anna.clone(),
                text: "Cliente ha richiesto consegna mattutina.".into(),
                timestamp: now,
            }],
        },
        Shipment {
            id: "s2".into(),
            order_number: "RM-00124".into(),
            tracking_number: "1Z999AA10123456785".into(),
            customer: customer("Creative Minds Agency", "Corso Vittorio Emanuele 10, Torino"),
            products: vec![product("p3", "Monitor 27\" 4K", 1)],
            assigned_to: luigi.clone(),
            due_date: days_from(now, 3),
            priority: Priority::Medium,
            status: ShipmentStatus::InProgress,
            attachments: Vec::new(),
            comments: Vec::new(),
        },
        Shipment {
            id: "s3".into(),
            order_number: "RM-00125".into(),
            tracking_number: "1Z999AA10123456786".into(),
            customer: customer("Global Imports", "Piazza del Popolo 5, Roma"),
            products: vec![
                product("p4", "Tastiera Meccanica RGB", 5),
                product("p5", "Webcam HD", 5),
            ],
            assigned_to: mario.clone(),
            due_date: days_from(now, -1),
            priority: Priority::Low,
            status: ShipmentStatus::Ready,
            attachments: vec![Attachment {
                id: "a2".into(),
                name: "foto_pacco.jpg".into(),
                url: "https://picsum.photos/200/300".into(),
                kind: AttachmentKind::Image,
            }],
            comments: Vec::new(),
        },
        Shipment {
            id: "s4".into(),
            order_number: "RM-00121".into(),
            tracking_number: "1Z999AA10123456782".into(),
            customer: customer("Ufficio Stampa", "Via della Conciliazione, Roma"),
            products: vec![product("p6", "Stampante Laser", 1)],
            assigned_to: anna.clone(),
            due_date: days_from(now, -2),
            priority: Priority::Medium,
            status: ShipmentStatus::ToDo,
            attachments: Vec::new(),
            comments: Vec::new(),
        },
        Shipment {
            id: "s5".into(),
            order_number: "RM-00120".into(),
            tracking_number: "1Z999AA10123456781".into(),
            customer: customer("Studio Legale & Associati", "Via Montenapoleone 2, Milano"),
            products: vec![product("p7", "Scanner Professionale", 1)],
            assigned_to: luigi.clone(),
            due_date: days_from(now, -5),
            priority: Priority::Low,
            status: ShipmentStatus::Ready,
            attachments: Vec::new(),
            comments: Vec::new(),
        },
        Shipment {
            id: "s6".into(),
            order_number: "RM-00119".into(),
            tracking_number: "1Z999AA10123456780".into(),
            customer: customer("Ospedale San Raffaele", "Via Olgettina 60, Milano"),
            products: vec![product("p8", "Cavi HDMI 10m", 20)],
            assigned_to: mario.clone(),
            due_date: days_from(now, -7),
            priority: Priority::High,
            status: ShipmentStatus::Ready,
            attachments: Vec::new(),
            comments: Vec::new(),
        },
    ];

    let tasks = vec![
        Task {
            id: "t1".into(),
            title: "Inventario scaffale B-03".into(),
            assigned_to: luigi,
            due_date: now,
            priority: Priority::High,
            tags: vec!["#inventario".into(), "#magazzino".into()],
            category: "Operazioni Magazzino".into(),
            sub_tasks: vec![
                sub_task("st1-1", "Contare articoli tipo A", true),
                sub_task("st1-2", "Contare articoli tipo B", false),
                sub_task("st1-3", "Aggiornare gestionale", false),
            ],
            completed: false,
        },
        Task {
            id: "t2".into(),
            title: "Gestire reso ordine RM-00115".into(),
            assigned_to: anna,
            due_date: days_from(now, 1),
            priority: Priority::Medium,
            tags: vec!["#resi".into()],
            category: "Amministrazione".into(),
            sub_tasks: Vec::new(),
            completed: false,
        },
        Task {
            id: "t3".into(),
            title: "Manutenzione muletto".into(),
            assigned_to: mario,
            due_date: days_from(now, 5),
            priority: Priority::Low,
            tags: vec!["#manutenzione".into()],
            category: "Manutenzione".into(),
            sub_tasks: Vec::new(),
            completed: true,
        },
    ];

    let today = now.date();
    let custom_events = vec![CustomEvent {
        id: "event-p1".into(),
        title: "Ritiro Corriere TNT".into(),
        start: at(today, 16, 0),
        end: at(today, 17, 0),
        kind: CustomEventKind::Pickup,
        resource_id: "tnt".into(),
    }];

    let notes = vec![
        Note {
            id: "n1".into(),
            title: "Procedure Corriere TNT".into(),
            content: "Contattare referente Marco al 333-1234567. Assicurarsi che le bolle siano firmate in duplice copia.".into(),
            notebook: "Procedure Corrieri".into(),
            is_shared: true,
            last_modified: now,
        },
        Note {
            id: "n2".into(),
            title: "Note Riunione Logistica 15/07".into(),
            content: "Punti discussi: ottimizzazione percorsi, nuovo software di tracking, gestione ferie agosto.".into(),
            notebook: "Note Riunioni".into(),
            is_shared: true,
            last_modified: now,
        },
        Note {
            id: "n3".into(),
            title: "Codici allarme magazzino".into(),
            content: "Ingresso: 1234#, Uscita: 5678#. Non condividere.".into(),
            notebook: "Informazioni Riservate".into(),
            is_shared: false,
            last_modified: now,
        },
    ];

    let emails = vec![
        Email {
            id: "e1".into(),
            sender: "corriere@brt.it".into(),
            subject: "Conferma ritiro per oggi".into(),
            snippet: "Buongiorno, confermiamo il ritiro per le ore 16:00...".into(),
            is_read: false,
            timestamp: at(today, 9, 15),
        },
        Email {
            id: "e2".into(),
            sender: "info@techsolutions.it".into(),
            subject: "Info su ordine RM-00123".into(),
            snippet: "Salve, vorremmo sapere a che punto è la nostra spedizione...".into(),
            is_read: false,
            timestamp: at(today, 10, 30),
        },
        Email {
            id: "e3".into(),
            sender: "support@dhl.com".into(),
            subject: "Documentazione spedizione internazionale".into(),
            snippet: "In allegato i documenti necessari per la spedizione in Svizzera.".into(),
            is_read: true,
            timestamp: days_from(now, -1),
        },
    ];

    SeedData {
        users,
        shipments,
        tasks,
        notes,
        custom_events,
        emails,
    }
}

fn customer(name: &str, address: &str) -> Customer {
    Customer {
        name: name.into(),
        address: address.into(),
    }
}

fn product(id: &str, name: &str, quantity: u32) -> Product {
    Product {
        id: id.into(),
        name: name.into(),
        quantity,
    }
}

fn sub_task(id: &str, text: &str, completed: bool) -> SubTask {
    SubTask {
        id: id.into(),
        text: text.into(),
        completed,
    }
}

fn days_from(now: NaiveDateTime, days: i64) -> NaiveDateTime {
    now.checked_add_signed(Duration::days(days)).unwrap_or(now)
}

fn at(day: NaiveDate, hour: u32, minute: u32) -> NaiveDateTime {
    day.and_hms_opt(hour, minute, 0)
        .unwrap_or_else(|| crate::clock::start_of_day(day))
}

#[cfg(test)]
mod tests {
    use super::demo_seed;
    use crate::model::shipment::ShipmentStatus;
    use chrono::NaiveDate;

    #[test]
    fn seed_status_split_is_two_one_three() {
        let now = NaiveDate::from_ymd_opt(2026, 7, 15)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let seed = demo_seed(now);
        let count = |status| {
            seed.shipments
                .iter()
                .filter(|shipment| shipment.status == status)
                .count()
        };
        assert_eq!(seed.shipments.len(), 6);
        assert_eq!(count(ShipmentStatus::ToDo), 2);
        assert_eq!(count(ShipmentStatus::InProgress), 1);
        assert_eq!(count(ShipmentStatus::Ready), 3);
    }
}
