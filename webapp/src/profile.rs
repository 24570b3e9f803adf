// fixed profile copy shown on the about, portfolio, and home pages.  unlike
// SiteContent none of this is editable from the admin panel

pub struct Experience {
    pub years: &'static str,
    pub role: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
}

pub struct Education {
    pub year: &'static str,
    pub degree: &'static str,
    pub institution: &'static str,
    pub location: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub name: &'static str,
    pub text: &'static str,
}

pub struct Language {
    pub name: &'static str,
    pub level: u8,
}

pub const EXPERIENCE: [Experience; 4] = [
    Experience {
        years: "2013 - Present",
        role: "Specialist (OBGYN)",
        location: "Aster Royal Al Raffah Hospital, Muscat, Oman",
        description: "Delivering comprehensive women's healthcare as a lead specialist. Expert in high-risk pregnancies, infertility treatments, and minimally invasive laparoscopic procedures.",
        details: &[
            "High-Risk Obstetrics",
            "Laparoscopic Surgery",
            "Infertility Management",
            "Colposcopy",
        ],
    },
    Experience {
        years: "2011 - 2013",
        role: "Specialist OBGYN",
        location: "YAS Medical Center / Al Waha Medical Center, Oman",
        description: "Provided specialized gynecological care and antenatal management in a busy private practice setting.",
        details: &["Outpatient Care", "Diagnostic Ultrasound", "Patient Counseling"],
    },
    Experience {
        years: "2005 - 2011",
        role: "Medical Officer / Specialist",
        location: "Ministry of Health Hospitals, Saudi Arabia & Oman",
        description: "Served diverse communities across the Gulf region, gaining deep expertise in handling obstetric emergencies and diverse pathologies.",
        details: &[
            "Emergency Obstetrics",
            "Labor Ward Management",
            "Cultural Competence",
        ],
    },
    Experience {
        years: "2002 - 2005",
        role: "Early Career & Training",
        location: "Dhaka Medical College / Women's Medical College, Bangladesh",
        description: "Built foundational skills in a high-volume tertiary care setting, focusing on surgical skills and medical ethics.",
        details: &[],
    },
];

pub const EDUCATION: [Education; 4] = [
    Education {
        year: "2023",
        degree: "MRCOG - Part 1",
        institution: "Royal College of Physicians & Surgeons",
        location: "United Kingdom",
        description: "Advanced membership qualification demonstrating excellence in obstetrics and gynaecology.",
    },
    Education {
        year: "2012",
        degree: "Diploma in Women's Health (DOWH)",
        institution: "Royal College of Physicians of Ireland",
        location: "Dublin, Ireland",
        description: "Specialized post-graduate diploma focusing on modern women's healthcare practices.",
    },
    Education {
        year: "2003",
        degree: "Emergency Obstetrical Training (EOC)",
        institution: "Dhaka Medical College & Hospital",
        location: "Bangladesh",
        description: "Intensive training certification for managing critical obstetric emergencies.",
    },
    Education {
        year: "2002",
        degree: "Bachelor of Medicine, Bachelor of Surgery (MBBS)",
        institution: "Medical College for Women & Hospital",
        location: "Dhaka University, Bangladesh",
        description: "Graduated with honors, establishing a strong foundation in medical science.",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Layla Al-Said",
        text: "Dr. Monia treated me with such patience and understanding. Her confidence made me feel safe during a difficult pregnancy.",
    },
    Testimonial {
        name: "Noor Al-Balushi",
        text: "A Doctor Who Truly Listens! Professional, Kind, and Skilled. Highly recommended for anyone seeking genuine care.",
    },
    Testimonial {
        name: "Fatima Al-Harthi",
        text: "One of the few doctors who genuinely takes time to understand your concerns. She made me feel heard and comfortable.",
    },
];

pub const LANGUAGES: [Language; 5] = [
    Language { name: "English", level: 95 },
    Language { name: "Bangla", level: 100 },
    Language { name: "Arabic", level: 90 },
    Language { name: "Hindi", level: 85 },
    Language { name: "Urdu", level: 85 },
];
