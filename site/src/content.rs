// static page content
//
// these tables are the only data on the page and are never mutated at runtime.  images are
// referenced by path under the public asset directory; icons by an enum the stylesheet maps to
// artwork
use std::fmt;

pub const IMAGE_ROOT: &str = "/assets/images";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Code,
    Palette,
    Smartphone,
    Globe,
    Database,
    Users,
    CheckCircle,
}

impl Icon {
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Code => "icon-code",
            Self::Palette => "icon-palette",
            Self::Smartphone => "icon-smartphone",
            Self::Globe => "icon-globe",
            Self::Database => "icon-database",
            Self::Users => "icon-users",
            Self::CheckCircle => "icon-check-circle",
        }
    }
}

// accent colours for the about cards
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Accent {
    Blue,
    Purple,
    Green,
}

impl Accent {
    pub fn to_css_color(self) -> &'static str {
        match self {
            Self::Blue => "#2563EB",
            Self::Purple => "#9333EA",
            Self::Green => "#16A34A",
        }
    }

    pub fn to_css_background(self) -> &'static str {
        match self {
            Self::Blue => "rgba(37, 99, 235, 0.08)",
            Self::Purple => "rgba(147, 51, 234, 0.08)",
            Self::Green => "rgba(22, 163, 74, 0.08)",
        }
    }
}

impl fmt::Display for Accent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css_color())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub tags: &'static [&'static str],
    // file name under IMAGE_ROOT
    pub image: &'static str,
}

impl Project {
    pub fn image_src(&self) -> String {
        format!("{IMAGE_ROOT}/{}", self.image)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Value {
    pub title: &'static str,
    pub blurb: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

pub const SERVICES: &[Service] = &[
    Service {
        id: 1,
        title: "Web Development",
        description: "Custom web applications built with modern technologies like React, Vue, and Node.js",
        icon: Icon::Code,
    },
    Service {
        id: 2,
        title: "UI/UX Design",
        description: "User-centered design solutions that create intuitive and engaging digital experiences",
        icon: Icon::Palette,
    },
    Service {
        id: 3,
        title: "Mobile Development",
        description: "Native and cross-platform mobile apps for iOS and Android using React Native",
        icon: Icon::Smartphone,
    },
    Service {
        id: 4,
        title: "E-commerce Solutions",
        description: "Complete online store development with payment integration and inventory management",
        icon: Icon::Globe,
    },
    Service {
        id: 5,
        title: "Database Design",
        description: "Scalable database architecture and optimization for high-performance applications",
        icon: Icon::Database,
    },
    Service {
        id: 6,
        title: "Team Augmentation",
        description: "Skilled developers to extend your team and accelerate project delivery",
        icon: Icon::Users,
    },
];

pub const PORTFOLIO: &[Project] = &[
    Project {
        id: 1,
        title: "E-Commerce Platform",
        tags: &["React", "Node.js", "MongoDB"],
        image: "ecommerce.jpg",
    },
    Project {
        id: 2,
        title: "Healthcare Management System",
        tags: &["Vue.js", "Python", "PostgreSQL"],
        image: "health.jpg",
    },
    Project {
        id: 3,
        title: "Financial Dashboard",
        tags: &["React", "D3.js", "API Integration"],
        image: "financial-dashboard.png",
    },
    Project {
        id: 4,
        title: "Social Media App",
        tags: &["React Native", "Firebase", "Redux"],
        image: "social-media.jpeg",
    },
    Project {
        id: 5,
        title: "Learning Management System",
        tags: &["Angular", "Express", "MySQL"],
        image: "lms.webp",
    },
    Project {
        id: 6,
        title: "Real Estate Platform",
        tags: &["Next.js", "Tailwind", "Strapi"],
        image: "real-estate.jpg",
    },
];

pub const VALUES: &[Value] = &[
    Value {
        title: "Innovation First",
        blurb: "We embrace cutting-edge technologies and methodologies to deliver solutions that stay ahead of the curve.",
        icon: Icon::CheckCircle,
        accent: Accent::Blue,
    },
    Value {
        title: "Client-Centric",
        blurb: "Every project is tailored to meet our clients' unique needs, ensuring maximum value and satisfaction.",
        icon: Icon::Users,
        accent: Accent::Purple,
    },
    Value {
        title: "Global Impact",
        blurb: "We build scalable solutions that make a positive impact on businesses and communities worldwide.",
        icon: Icon::Globe,
        accent: Accent::Green,
    },
];
