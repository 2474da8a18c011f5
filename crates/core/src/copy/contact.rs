use super::ThemeTable;
use crate::contact::ContactField;

/// Label and placeholder of one form input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldCopy {
    pub label: &'static str,
    pub placeholder: &'static str,
}

/// Icons next to the contact details
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoIcons {
    pub address: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub website: &'static str,
}

/// Contact view presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactCopy {
    pub container_class: &'static str,
    pub title: &'static str,
    pub title_class: &'static str,
    pub intro: &'static str,
    pub intro_class: &'static str,
    pub columns_class: &'static str,
    pub heading_class: &'static str,
    pub form_heading: &'static str,
    pub success_message: &'static str,
    /// In [`ContactField::ALL`] order
    pub fields: [FieldCopy; 4],
    pub submit_label: &'static str,
    pub sending_label: &'static str,
    pub submit_class: &'static str,
    pub info_heading: &'static str,
    pub icons: InfoIcons,
    pub hours_heading: &'static str,
}

impl ContactCopy {
    #[must_use]
    pub const fn field(&self, field: ContactField) -> &FieldCopy {
        match field {
            ContactField::Name => &self.fields[0],
            ContactField::Email => &self.fields[1],
            ContactField::Subject => &self.fields[2],
            ContactField::Message => &self.fields[3],
        }
    }
}

const PLAIN_FIELDS: [FieldCopy; 4] = [
    FieldCopy {
        label: "Name *",
        placeholder: "Enter your name",
    },
    FieldCopy {
        label: "Email *",
        placeholder: "Enter your email",
    },
    FieldCopy {
        label: "Subject",
        placeholder: "Enter subject",
    },
    FieldCopy {
        label: "Message *",
        placeholder: "Enter your message",
    },
];

const PLAIN_ICONS: InfoIcons = InfoIcons {
    address: "📍",
    phone: "☎️",
    email: "📧",
    website: "🔗",
};

const PLAIN_SUCCESS: &str = "✅ Message sent successfully! We'll get back to you soon.";

pub static CONTACT: ThemeTable<ContactCopy> = ThemeTable {
    minimal: ContactCopy {
        container_class: "max-w-2xl mx-auto",
        title: "Contact Us",
        title_class: "text-xl sm:text-2xl lg:text-4xl",
        intro: "We'd love to hear from you. Send us a message and we'll respond as soon as possible.",
        intro_class: "text-sm sm:text-base",
        columns_class: "grid-cols-1",
        heading_class: "text-lg sm:text-xl",
        form_heading: "Send Message",
        success_message: PLAIN_SUCCESS,
        fields: PLAIN_FIELDS,
        submit_label: "Send Message",
        sending_label: "Sending...",
        submit_class: "rounded-md",
        info_heading: "Contact Information",
        icons: PLAIN_ICONS,
        hours_heading: "Office Hours",
    },
    dark: ContactCopy {
        container_class: "max-w-4xl mx-auto",
        title: "Contact Us",
        title_class: "text-2xl sm:text-3xl lg:text-5xl",
        intro: "Connect with our team for inquiries, collaboration opportunities, or technical discussions.",
        intro_class: "text-sm sm:text-base",
        columns_class: "grid-cols-1 lg:grid-cols-2",
        heading_class: "text-lg sm:text-xl",
        form_heading: "Send Message",
        success_message: PLAIN_SUCCESS,
        fields: PLAIN_FIELDS,
        submit_label: "Send Message",
        sending_label: "Sending...",
        submit_class: "rounded-md",
        info_heading: "Contact Information",
        icons: PLAIN_ICONS,
        hours_heading: "Office Hours",
    },
    colorful: ContactCopy {
        container_class: "text-center",
        title: "💌 Get In Touch!",
        title_class: "text-3xl sm:text-4xl lg:text-6xl",
        intro: "We're super excited to hear from you! Drop us a line and let's chat! 🎉",
        intro_class: "text-base sm:text-lg",
        columns_class: "grid-cols-1",
        heading_class: "text-xl sm:text-2xl",
        form_heading: "📝 Send us a Message",
        success_message: "🎉 Yay! Your message was sent successfully!",
        fields: [
            FieldCopy {
                label: "👤 Your Name",
                placeholder: "What should we call you?",
            },
            FieldCopy {
                label: "📧 Email Address",
                placeholder: "your@email.com",
            },
            FieldCopy {
                label: "💭 What's this about?",
                placeholder: "Give us a hint!",
            },
            FieldCopy {
                label: "✨ Your Message",
                placeholder: "Tell us everything! We love details! 💕",
            },
        ],
        submit_label: "🚀 Send Message!",
        sending_label: "Sending Magic...",
        submit_class: "rounded-full",
        info_heading: "📍 Find Us Here",
        icons: InfoIcons {
            address: "🏢",
            phone: "📞",
            email: "✉️",
            website: "🌐",
        },
        hours_heading: "⏰ When We're Available",
    },
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn required_fields_are_marked_outside_colorful() {
        for theme in [Theme::Minimal, Theme::Dark] {
            let copy = CONTACT.get(theme);
            for field in ContactField::ALL {
                assert_eq!(
                    copy.field(field).label.ends_with('*'),
                    field.is_required(),
                    "{theme} {field:?}"
                );
            }
        }
    }

    #[test]
    fn field_lookup_follows_form_order() {
        let copy = CONTACT.get(Theme::Colorful);
        assert_eq!(copy.field(ContactField::Subject).placeholder, "Give us a hint!");
        assert_eq!(copy.field(ContactField::Email).label, "📧 Email Address");
    }
}
