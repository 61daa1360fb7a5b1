//! Fixed content for every page.

use super::Slide;

#[derive(Debug, Clone, Copy)]
pub struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub number: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub rating: u8,
}

#[derive(Debug, Clone, Copy)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ForumPost {
    pub title: &'static str,
    pub author: &'static str,
    pub time: &'static str,
    pub replies: u32,
    pub likes: u32,
    pub category: &'static str,
    pub excerpt: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Expert {
    pub name: &'static str,
    pub title: &'static str,
    pub specialties: &'static [&'static str],
    pub rating: f32,
    pub reviews: u32,
    pub experience: &'static str,
    pub price: &'static str,
    pub bio: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ContactDetail {
    pub icon: &'static str,
    pub label: &'static str,
    pub lines: &'static [&'static str],
}

pub const STATS: [Stat; 4] = [
    Stat {
        number: "10,000+",
        label: "Students Guided",
    },
    Stat {
        number: "95%",
        label: "Success Rate",
    },
    Stat {
        number: "500+",
        label: "Career Paths",
    },
    Stat {
        number: "50+",
        label: "Expert Mentors",
    },
];

pub const HOME_FEATURES: [Feature; 4] = [
    Feature {
        icon: "🧠",
        title: "AI-Powered Career Prediction",
        description: "Get personalized career recommendations based on your skills, interests, \
                      and personality.",
    },
    Feature {
        icon: "💬",
        title: "Community Forum",
        description: "Connect with like-minded individuals, share experiences, and get advice \
                      from professionals in your field of interest.",
    },
    Feature {
        icon: "👥",
        title: "Expert Consultation",
        description: "Book one-on-one sessions with industry experts and career counselors to \
                      get personalized guidance.",
    },
    Feature {
        icon: "📈",
        title: "Career Growth Tracking",
        description: "Track your progress, set goals, and receive recommendations for skill \
                      development and career advancement.",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Johnson",
        role: "Software Engineer",
        content: "Future Foundry helped me transition from marketing to tech. \
                  The AI predictions were spot-on!",
        rating: 5,
    },
    Testimonial {
        name: "Michael Chen",
        role: "Data Scientist",
        content: "The expert consultations gave me the confidence to pursue my dream career in AI.",
        rating: 5,
    },
    Testimonial {
        name: "Emily Rodriguez",
        role: "UX Designer",
        content: "Amazing platform! The community support made all the difference in my \
                  career journey.",
        rating: 5,
    },
];

pub const ABOUT_FEATURES: [Feature; 4] = [
    Feature {
        icon: "🎯",
        title: "Our Mission",
        description: "To empower individuals with AI-driven career guidance and connect them \
                      with expert mentors to achieve their professional goals.",
    },
    Feature {
        icon: "👥",
        title: "Community Driven",
        description: "Built by professionals for professionals, fostering a supportive \
                      community of career growth and knowledge sharing.",
    },
    Feature {
        icon: "🏆",
        title: "Proven Results",
        description: "95% of our users report increased clarity about their career path within \
                      30 days of using our platform.",
    },
    Feature {
        icon: "📈",
        title: "Continuous Growth",
        description: "We constantly improve our models and expand our expert network to \
                      provide the best career guidance.",
    },
];

pub const TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Alex Thompson",
        role: "CEO & Co-founder",
        bio: "Former Google PM with 10+ years in tech. Passionate about democratizing career \
              guidance.",
    },
    TeamMember {
        name: "Dr. Priya Sharma",
        role: "CTO & AI Lead",
        bio: "PhD in Machine Learning from MIT. Expert in building AI systems for \
              human-centered applications.",
    },
    TeamMember {
        name: "Marcus Johnson",
        role: "Head of Community",
        bio: "Career counselor turned community builder. Helped thousands find their ideal \
              career paths.",
    },
];

/// Forum topics. The first entry matches every post.
pub const FORUM_CATEGORIES: [&str; 8] = [
    "All Topics",
    "Career Transition",
    "Programming",
    "Work Culture",
    "Skill Development",
    "Interview Tips",
    "Freelancing",
    "Entrepreneurship",
];

pub const FORUM_POSTS: [ForumPost; 3] = [
    ForumPost {
        title: "How to transition from Engineering to Data Science?",
        author: "Alex Johnson",
        time: "2 hours ago",
        replies: 12,
        likes: 25,
        category: "Career Transition",
        excerpt: "I have been working as a software engineer for 3 years and want to move into \
                  data science...",
    },
    ForumPost {
        title: "Best programming languages for beginners in 2024",
        author: "Sarah Miller",
        time: "5 hours ago",
        replies: 8,
        likes: 18,
        category: "Programming",
        excerpt: "Starting my programming journey and confused about which language to pick \
                  first...",
    },
    ForumPost {
        title: "Remote work vs Office: What are your experiences?",
        author: "Mike Chen",
        time: "1 day ago",
        replies: 24,
        likes: 42,
        category: "Work Culture",
        excerpt: "Been working remotely for 2 years now and considering switching back to \
                  office...",
    },
];

pub const EXPERTS: [Expert; 3] = [
    Expert {
        name: "Dr. Emily Rodriguez",
        title: "Senior Data Scientist at Google",
        specialties: &["Data Science", "Machine Learning", "Career Transition"],
        rating: 4.9,
        reviews: 156,
        experience: "10+ years",
        price: "$150/hour",
        bio: "PhD in Computer Science with extensive experience in AI and ML. Helped 200+ \
              professionals transition to data science.",
    },
    Expert {
        name: "Michael Chen",
        title: "VP of Engineering at Microsoft",
        specialties: &["Software Engineering", "Technical Leadership", "System Design"],
        rating: 4.8,
        reviews: 203,
        experience: "15+ years",
        price: "$200/hour",
        bio: "Former startup founder turned tech executive. Expert in scaling engineering \
              teams and technical strategy.",
    },
    Expert {
        name: "Sarah Kim",
        title: "Product Manager at Apple",
        specialties: &["Product Management", "Strategy", "User Experience"],
        rating: 4.9,
        reviews: 128,
        experience: "8+ years",
        price: "$120/hour",
        bio: "Led product development for consumer apps with millions of users. Passionate \
              about mentoring aspiring PMs.",
    },
];

pub const CONTACT_DETAILS: [ContactDetail; 3] = [
    ContactDetail {
        icon: "✉️",
        label: "Email",
        lines: &["support@futurefoundry.com"],
    },
    ContactDetail {
        icon: "📞",
        label: "Phone",
        lines: &["+1 (555) 123-4567"],
    },
    ContactDetail {
        icon: "📍",
        label: "Office",
        lines: &["123 Innovation Drive", "San Francisco, CA 94105"],
    },
];

/// Slides shown on the Home page carousel unless the config overrides them.
pub fn default_slides() -> Vec<Slide> {
    let mut slides: Vec<Slide> = HOME_FEATURES
        .iter()
        .map(|feature| {
            Slide::new(
                format!("{} {}", feature.icon, feature.title),
                feature.description,
            )
        })
        .collect();
    slides.push(Slide::new(
        "🚀 Success Stories",
        "10,000+ students guided with a 95% success rate across 500+ career paths.",
    ));
    slides
}
