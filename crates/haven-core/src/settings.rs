//! Settings screen state: the bounded emergency-contact list, its add form,
//! and the two app toggles.

/// Maximum number of emergency contacts.
pub const MAX_CONTACTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmergencyContact {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

/// Fields of the add-contact form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Phone,
    Relationship,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [Self::Name, Self::Phone, Self::Relationship];

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Phone,
            Self::Phone => Self::Relationship,
            Self::Relationship => Self::Name,
        }
    }

    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Phone => "Phone Number",
            Self::Relationship => "Relationship (e.g., Friend, Sister)",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

impl ContactDraft {
    #[must_use]
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Phone => &self.phone,
            ContactField::Relationship => &self.relationship,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Name => &mut self.name,
            ContactField::Phone => &mut self.phone,
            ContactField::Relationship => &mut self.relationship,
        }
    }

    /// Name and phone are required; relationship is optional.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.phone.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddContactOutcome {
    Added { id: String },
    Incomplete,
    AtCapacity,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactBook {
    contacts: Vec<EmergencyContact>,
    form_open: bool,
    draft: ContactDraft,
    focus: ContactField,
}

impl ContactBook {
    #[must_use]
    pub fn new(contacts: Vec<EmergencyContact>) -> Self {
        Self {
            contacts,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_sample_contacts() -> Self {
        Self::new(vec![
            EmergencyContact {
                id: "1".to_owned(),
                name: "Mom".to_owned(),
                phone: "+27 82 123 4567".to_owned(),
                relationship: "Mother".to_owned(),
            },
            EmergencyContact {
                id: "2".to_owned(),
                name: "Sister Sarah".to_owned(),
                phone: "+27 81 234 5678".to_owned(),
                relationship: "Sister".to_owned(),
            },
        ])
    }

    #[must_use]
    pub fn contacts(&self) -> &[EmergencyContact] {
        &self.contacts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.contacts.len() >= MAX_CONTACTS
    }

    /// `n/5 contacts` counter.
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("{}/{MAX_CONTACTS} contacts", self.contacts.len())
    }

    #[must_use]
    pub fn form_open(&self) -> bool {
        self.form_open
    }

    #[must_use]
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    #[must_use]
    pub fn focus(&self) -> ContactField {
        self.focus
    }

    /// Open the add form. Refused while the list is full.
    pub fn open_form(&mut self) -> bool {
        if self.is_full() {
            return false;
        }
        self.form_open = true;
        self.focus = ContactField::Name;
        true
    }

    /// Close the form and discard the draft.
    pub fn cancel_form(&mut self) {
        self.form_open = false;
        self.draft = ContactDraft::default();
        self.focus = ContactField::Name;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn type_char(&mut self, ch: char) {
        if self.form_open {
            self.draft.field_mut(self.focus).push(ch);
        }
    }

    pub fn backspace(&mut self) {
        if self.form_open {
            self.draft.field_mut(self.focus).pop();
        }
    }

    pub fn set_draft(&mut self, draft: ContactDraft) {
        self.draft = draft;
    }

    /// Append the drafted contact. On success the form closes and clears.
    pub fn submit_form(&mut self) -> AddContactOutcome {
        if self.is_full() {
            return AddContactOutcome::AtCapacity;
        }
        if !self.draft.is_complete() {
            return AddContactOutcome::Incomplete;
        }
        let draft = std::mem::take(&mut self.draft);
        let id = uuid::Uuid::new_v4().to_string();
        self.contacts.push(EmergencyContact {
            id: id.clone(),
            name: draft.name.trim().to_owned(),
            phone: draft.phone.trim().to_owned(),
            relationship: draft.relationship.trim().to_owned(),
        });
        self.form_open = false;
        self.focus = ContactField::Name;
        AddContactOutcome::Added { id }
    }

    /// Remove a contact by id. Returns `true` if one was removed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|contact| contact.id != id);
        self.contacts.len() != before
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppToggle {
    Notifications,
    LocationServices,
}

impl AppToggle {
    pub const ALL: [AppToggle; 2] = [Self::Notifications, Self::LocationServices];

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Notifications => "Notifications",
            Self::LocationServices => "Location Services",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Notifications => "Get alerts and updates",
            Self::LocationServices => "Share location in emergencies",
        }
    }
}

/// App setting switches. Both start on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppToggles {
    pub notifications: bool,
    pub location_services: bool,
}

impl Default for AppToggles {
    fn default() -> Self {
        Self {
            notifications: true,
            location_services: true,
        }
    }
}

impl AppToggles {
    #[must_use]
    pub fn get(&self, toggle: AppToggle) -> bool {
        match toggle {
            AppToggle::Notifications => self.notifications,
            AppToggle::LocationServices => self.location_services,
        }
    }

    /// Flip one switch and return its new value.
    pub fn toggle(&mut self, toggle: AppToggle) -> bool {
        let slot = match toggle {
            AppToggle::Notifications => &mut self.notifications,
            AppToggle::LocationServices => &mut self.location_services,
        };
        *slot = !*slot;
        *slot
    }
}
