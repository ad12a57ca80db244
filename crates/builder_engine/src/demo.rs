//! Built-in sample project and build stages used when no generator output
//! is supplied.

use builder_core::{Node, NodeTree, StepSequence, DEFAULT_PROMPT};

use crate::{Project, ProjectError};

const BUILD_STAGES: [(&str, &str); 5] = [
    (
        "Analyzing prompt",
        "Understanding your requirements and planning the structure",
    ),
    (
        "Creating project structure",
        "Setting up folders, files, and configurations",
    ),
    (
        "Building components",
        "Generating React components for your website",
    ),
    ("Adding styles", "Applying beautiful, responsive design"),
    ("Final touches", "Optimizing and polishing the final result"),
];

/// Index of the stage that is running when the progress view opens.
const INITIAL_ACTIVE_STAGE: usize = 2;

/// Five build stages with the first two already done.
pub fn default_steps() -> StepSequence {
    StepSequence::from_stages(BUILD_STAGES, INITIAL_ACTIVE_STAGE)
}

pub fn demo_project() -> Result<Project, ProjectError> {
    let tree = NodeTree::load(demo_nodes())?;
    Ok(Project {
        prompt: DEFAULT_PROMPT.to_string(),
        tree,
    })
}

fn demo_nodes() -> Vec<Node> {
    vec![
        Node::folder(
            "src",
            vec![
                Node::folder(
                    "components",
                    vec![
                        Node::file("Header.tsx", HEADER_TSX),
                        Node::file("Hero.tsx", HERO_TSX),
                        Node::file("Footer.tsx", FOOTER_TSX),
                    ],
                ),
                Node::folder(
                    "pages",
                    vec![
                        Node::file("index.tsx", INDEX_TSX),
                        Node::file("about.tsx", ABOUT_TSX),
                    ],
                ),
                Node::folder("styles", vec![Node::file("globals.css", GLOBALS_CSS)]),
            ],
        ),
        Node::folder(
            "public",
            vec![
                Node::file("favicon.ico", "Binary file - favicon icon"),
                Node::file("robots.txt", ROBOTS_TXT),
            ],
        ),
        Node::file("package.json", PACKAGE_JSON),
        Node::file("tailwind.config.js", TAILWIND_CONFIG_JS),
    ]
}

const HEADER_TSX: &str = r##"import React from 'react';

export function Header() {
  return (
    <header className="flex items-center justify-between p-6">
      <div className="text-2xl font-bold">
        Logo
      </div>
      <nav className="flex gap-6">
        <a href="#" className="hover:text-primary">Home</a>
        <a href="#" className="hover:text-primary">About</a>
        <a href="#" className="hover:text-primary">Contact</a>
      </nav>
    </header>
  );
}"##;

const HERO_TSX: &str = r##"import React from 'react';

export function Hero() {
  return (
    <section className="min-h-screen flex items-center justify-center">
      <div className="text-center">
        <h1 className="text-6xl font-bold mb-6">
          Welcome to Your Site
        </h1>
        <p className="text-xl text-muted-foreground">
          Start building something amazing
        </p>
      </div>
    </section>
  );
}"##;

const FOOTER_TSX: &str = r##"import React from 'react';

export function Footer() {
  return (
    <footer className="border-t border-border py-8">
      <div className="container mx-auto text-center">
        <p className="text-muted-foreground">
          © 2024 Your Company. All rights reserved.
        </p>
      </div>
    </footer>
  );
}"##;

const INDEX_TSX: &str = r##"import { Header } from '@/components/Header';
import { Hero } from '@/components/Hero';
import { Footer } from '@/components/Footer';

export default function Home() {
  return (
    <div className="min-h-screen bg-background">
      <Header />
      <Hero />
      <Footer />
    </div>
  );
}"##;

const ABOUT_TSX: &str = r##"import { Header } from '@/components/Header';
import { Footer } from '@/components/Footer';

export default function About() {
  return (
    <div className="min-h-screen bg-background">
      <Header />
      <main className="container mx-auto py-12">
        <h1 className="text-4xl font-bold mb-6">About Us</h1>
        <p className="text-muted-foreground">
          Learn more about our company and mission.
        </p>
      </main>
      <Footer />
    </div>
  );
}"##;

const GLOBALS_CSS: &str = r##"@tailwind base;
@tailwind components;
@tailwind utilities;

:root {
  --background: 0 0% 100%;
  --foreground: 222.2 84% 4.9%;
  --primary: 168 84% 40%;
}

.dark {
  --background: 220 20% 6%;
  --foreground: 220 10% 95%;
  --primary: 168 84% 50%;
}

body {
  font-family: system-ui, sans-serif;
}"##;

const ROBOTS_TXT: &str = r##"User-agent: *
Allow: /

Sitemap: https://example.com/sitemap.xml"##;

const PACKAGE_JSON: &str = r##"{
  "name": "my-website",
  "version": "1.0.0",
  "scripts": {
    "dev": "vite",
    "build": "vite build",
    "preview": "vite preview"
  },
  "dependencies": {
    "react": "^18.3.1",
    "react-dom": "^18.3.1"
  },
  "devDependencies": {
    "vite": "^5.0.0",
    "tailwindcss": "^3.4.0"
  }
}"##;

const TAILWIND_CONFIG_JS: &str = r##"/** @type {import('tailwindcss').Config} */
module.exports = {
  darkMode: 'class',
  content: ['./src/**/*.{js,ts,jsx,tsx}'],
  theme: {
    extend: {
      colors: {
        background: 'hsl(var(--background))',
        foreground: 'hsl(var(--foreground))',
        primary: 'hsl(var(--primary))',
      },
    },
  },
  plugins: [],
}"##;
