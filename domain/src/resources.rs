//! The API's collections and nested collections.

use crate::repository::{Resource, Subresource, WritableSubresource};
use shared::*;

macro_rules! resource {
    ($name:ident, $record:ty, $payload:ty, $collection:literal, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl Resource for $name {
            type Record = $record;
            type Payload = $payload;
            const COLLECTION: &'static str = $collection;
            const LABEL: &'static str = $label;
        }
    };
}

resource!(Contacts, Contact, ContactPayload, "contacts", "contact");
resource!(Volunteers, Volunteer, VolunteerPayload, "volunteers", "volunteer");
resource!(Donations, Donation, DonationPayload, "donations", "donation");
resource!(InventoryItems, InventoryItem, InventoryItemPayload, "inventory-items", "inventory item");
resource!(
    InventoryCategories,
    InventoryCategory,
    InventoryCategoryPayload,
    "inventory-categories",
    "inventory category"
);
resource!(
    InventoryTransactions,
    InventoryTransaction,
    InventoryTransactionPayload,
    "inventory-transactions",
    "inventory transaction"
);
resource!(Projects, Project, ProjectPayload, "projects", "project");
resource!(Campaigns, Campaign, CampaignPayload, "campaigns", "campaign");

macro_rules! subresource {
    ($name:ident, $parent:ty, $record:ty, $list:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name;

        impl Subresource for $name {
            type Parent = $parent;
            type Record = $record;
            const LIST_SEGMENT: &'static str = $list;
        }
    };
    ($name:ident, $parent:ty, $record:ty, $list:literal, $payload:ty, $add:literal) => {
        subresource!($name, $parent, $record, $list);

        impl WritableSubresource for $name {
            type Payload = $payload;
            const ADD_SEGMENT: &'static str = $add;
        }
    };
}

subresource!(ContactNotes, Contacts, ContactNote, "notes", ContactNotePayload, "add_note");
subresource!(ItemTransactions, InventoryItems, InventoryTransaction, "transactions");
subresource!(ProjectTasks, Projects, ProjectTask, "tasks", ProjectTaskPayload, "tasks");
subresource!(
    ProjectAssignments,
    Projects,
    VolunteerAssignment,
    "volunteer-assignments",
    VolunteerAssignmentPayload,
    "volunteer-assignments"
);
subresource!(
    ProjectHoursLogs,
    Projects,
    VolunteerHoursLog,
    "hours-log",
    VolunteerHoursLogPayload,
    "hours-log"
);
subresource!(CampaignDonations, Campaigns, Donation, "donations");
