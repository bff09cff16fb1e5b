//! Built-in portfolio content, used when no content.toml is present

use crate::section::SectionId;

use super::models::{
    CallToAction, Credits, Experience, Profile, Project, ProjectImage, SocialLink, StackItem,
};

pub fn profile() -> Profile {
    Profile {
        name: "ALAN TRAN".to_string(),
        headline: "Full Stack Software Engineer".to_string(),
        tagline: "I build software that scales. 5+ years turning complex problems into \
                  clean, production-grade systems. From full stack web frameworks and \
                  applications to AI-assisted developer tooling across enterprise and \
                  startup environments."
            .to_string(),
        portrait: Some("Alan Tran".to_string()),
        calls_to_action: vec![
            CallToAction {
                label: "My Experience".to_string(),
                target: SectionId::Experience,
                primary: true,
            },
            CallToAction {
                label: "View Projects".to_string(),
                target: SectionId::Projects,
                primary: false,
            },
        ],
    }
}

pub fn experiences() -> Vec<Experience> {
    vec![
        Experience {
            period: "Aug 2022 — Present".to_string(),
            role: "Software Engineer".to_string(),
            company: "WiseTech Global".to_string(),
            highlights: "Re-architected core framework flows, resolved 30+ production defects, \
                         delivered 20+ framework enhancements, and migrated 70+ files to \
                         TypeScript with ~30% fewer runtime type errors."
                .to_string(),
        },
        Experience {
            period: "Mar 2023 — Oct 2023".to_string(),
            role: "Technical Founder".to_string(),
            company: "Datawise".to_string(),
            highlights: "Built a configurable database generation platform with multi-table \
                         constraints, 60+ PostgreSQL data types, vendor-specific SQL adapters, \
                         and Docker-based deployment."
                .to_string(),
        },
        Experience {
            period: "Nov 2020 — May 2022".to_string(),
            role: "Part-Time Software Engineer".to_string(),
            company: "BENIT PTY LTD".to_string(),
            highlights: "Delivered full-stack outsourcing solutions, refactored 50+ React \
                         components to TypeScript, optimized PostgreSQL systems by ~35%, and \
                         managed 20+ AWS EC2 instances."
                .to_string(),
        },
    ]
}

fn image(src: &str, alt: &str) -> ProjectImage {
    ProjectImage {
        src: src.to_string(),
        alt: alt.to_string(),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            title: "Code-Driven Form Flow Engine".to_string(),
            description: "Re-architected a core YAML-based flow engine at WiseTech Global into \
                          a code-driven workflow with zero regression defects, improving \
                          flexibility and long-term maintainability for 20+ internal teams."
                .to_string(),
            tech: vec![
                StackItem::new("TypeScript", "TS"),
                StackItem::new("Node.js", "JS"),
                StackItem::new("React", "⚛"),
            ],
            preview: "Framework engine redesign, migration strategy, and zero-regression rollout"
                .to_string(),
            images: vec![
                image("flow-engine/overview.avif", "Flow engine overview"),
                image("flow-engine/migration.avif", "Migration strategy"),
                image("flow-engine/rollout.avif", "Rollout dashboard"),
            ],
        },
        Project {
            title: "Datawise SQL Generation Platform".to_string(),
            description: "Founded and built a configurable database generation platform \
                          supporting multi-table schemas, 60+ data types, and relational \
                          constraints with cross-vendor SQL output."
                .to_string(),
            tech: vec![
                StackItem::new("Next.js", "N"),
                StackItem::new("Chakra UI", "C"),
                StackItem::new("PostgreSQL", "PG"),
                StackItem::new("Oracle", "O"),
                StackItem::new("Docker", "D"),
            ],
            preview: "Schema modeling, SQL parser validation, and containerized data \
                      generation workflows"
                .to_string(),
            images: vec![
                image("datawise/schema.avif", "Schema designer"),
                image("datawise/types.avif", "Data type catalogue"),
                image("datawise/output.avif", "Generated SQL output"),
                image("datawise/deploy.avif", "Container deployment"),
            ],
        },
        Project {
            title: "AI-Accelerated Developer Enablement".to_string(),
            description: "Built reusable AI engineering assets (prompts, skill libraries, MCP \
                          server integrations, Copilot Spaces, and CLI tooling) to support \
                          analysis, refactoring, migration, and validation in a ~10M+ LOC \
                          ecosystem."
                .to_string(),
            tech: vec![
                StackItem::new("TypeScript", "TS"),
                StackItem::new("Node.js", "JS"),
                StackItem::new("React", "⚛"),
            ],
            preview: "Agent orchestration and automation toolkit that doubled productivity \
                      for 200+ developers"
                .to_string(),
            images: vec![image("enablement/toolkit.avif", "Automation toolkit")],
        },
    ]
}

pub fn stack() -> Vec<StackItem> {
    [
        ("TypeScript", "TS"),
        ("JavaScript", "JS"),
        ("React", "⚛"),
        ("Next.js", "N"),
        ("Astro", "A"),
        ("Node.js", "⬢"),
        ("Express", "Ex"),
        ("Python", "Py"),
        ("Java", "Jv"),
        ("C#", "C#"),
        ("PostgreSQL", "PG"),
        ("MongoDB", "Mg"),
        ("Redis", "Rd"),
        ("Oracle", "O"),
        ("Docker", "D"),
        ("Kubernetes", "K8"),
        ("AWS", "☁"),
        ("Git", "⎇"),
        ("GitHub Actions", "GH"),
        ("Jest", "Jt"),
        ("Playwright", "Pw"),
        ("Tailwind CSS", "Tw"),
        ("Chakra UI", "C"),
        ("Framer Motion", "Fm"),
        ("GraphQL", "GQ"),
        ("REST", "⇄"),
        ("Linux", "Lx"),
        ("Vite", "V"),
        ("Figma", "F"),
    ]
    .into_iter()
    .map(|(name, icon)| StackItem::new(name, icon))
    .collect()
}

pub fn links() -> Vec<SocialLink> {
    vec![
        SocialLink {
            label: "GitHub".to_string(),
            href: "https://github.com/quanchan".to_string(),
            icon: "GH".to_string(),
        },
        SocialLink {
            label: "LinkedIn".to_string(),
            href: "https://www.linkedin.com/in/alan-tran-165192237".to_string(),
            icon: "in".to_string(),
        },
        SocialLink {
            label: "Email".to_string(),
            href: "mailto:quan.trananh12@gmail.com".to_string(),
            icon: "@".to_string(),
        },
    ]
}

pub fn credits() -> Credits {
    Credits {
        lines: vec![
            "Anh Quan (Alan) Tran · Full-Stack Software Engineer · Greater Sydney Area, NSW."
                .to_string(),
            "quan.trananh12@gmail.com".to_string(),
        ],
        owner: "Alan Tran".to_string(),
        year: None,
    }
}
