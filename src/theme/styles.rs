//! Global CSS styles for the portfolio page.
//!
//! Light theme with an indigo accent. State classes (`active`, `invalid`,
//! `no-scroll`) are toggled by the components; portfolio item visibility
//! is written inline by the filter.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* ACCENT */
  --primary: #4f46e5;
  --primary-dark: #4338ca;
  --primary-soft: rgba(79, 70, 229, 0.1);

  /* INK & PAPER */
  --ink: #1f2937;
  --ink-muted: #6b7280;
  --paper: #ffffff;
  --paper-alt: #f9fafb;
  --border: #e5e7eb;

  /* SEMANTIC */
  --success: #10b981;
  --danger: #ef4444;

  /* Typography */
  --font-sans: 'Poppins', 'Segoe UI', Roboto, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html, body {
  height: 100%;
  overflow: hidden;
}

body {
  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--ink);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

a {
  color: inherit;
  text-decoration: none;
}

img {
  max-width: 100%;
  display: block;
}

ul {
  list-style: none;
}

/* === Page Container === */
.page {
  height: 100vh;
  overflow-y: auto;
  scroll-behavior: smooth;
  outline: none;
}

.page.no-scroll {
  overflow: hidden;
}

.section {
  padding: 100px 10%;
}

.section:nth-of-type(even) {
  background: var(--paper-alt);
}

/* === Section Title === */
.section-title {
  text-align: center;
  margin-bottom: 3rem;
}

.section-title h2 {
  font-size: 2.25rem;
  font-weight: 700;
}

.section-title .underline {
  width: 60px;
  height: 4px;
  margin: 0.75rem auto 0;
  border-radius: 2px;
  background: var(--primary);
}

.section-subtitle {
  margin-top: 1rem;
  color: var(--ink-muted);
}

/* === Buttons === */
.btn {
  display: inline-block;
  padding: 0.75rem 1.75rem;
  border-radius: 999px;
  border: 2px solid transparent;
  font: inherit;
  font-weight: 500;
  cursor: pointer;
  transition: background var(--transition-normal), color var(--transition-normal);
}

.btn:disabled {
  opacity: 0.6;
  cursor: wait;
}

.btn-primary {
  background: var(--primary);
  color: var(--paper);
}

.btn-primary:hover {
  background: var(--primary-dark);
}

.btn-outline {
  background: transparent;
  border-color: var(--primary);
  color: var(--primary);
}

.btn-outline:hover {
  background: var(--primary);
  color: var(--paper);
}

.icon-btn {
  width: 40px;
  height: 40px;
  border: none;
  border-radius: 50%;
  background: var(--paper);
  color: var(--ink);
  font-size: 1.5rem;
  cursor: pointer;
  box-shadow: 0 2px 6px rgba(0, 0, 0, 0.1);
}

.icon-btn:hover {
  background: var(--primary);
  color: var(--paper);
}

/* === Header === */
.header {
  position: sticky;
  top: 0;
  z-index: 100;
  transition: box-shadow var(--transition-normal);
}

.navbar {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1.25rem 10%;
}

.logo {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--primary);
}

.nav-links {
  display: flex;
  gap: 2rem;
}

.nav-links a {
  font-weight: 500;
  transition: color var(--transition-fast);
}

.nav-links a:hover,
.nav-links a.active {
  color: var(--primary);
}

.hamburger {
  display: none;
  background: none;
  border: none;
  cursor: pointer;
}

.hamburger .bar {
  display: block;
  width: 25px;
  height: 3px;
  margin: 5px auto;
  background: var(--ink);
  transition: transform var(--transition-normal), opacity var(--transition-normal);
}

/* === Hero === */
.hero {
  min-height: 90vh;
  display: flex;
  align-items: center;
}

.hero-greeting {
  color: var(--primary);
  font-weight: 500;
}

.hero-name {
  font-size: 3.5rem;
  line-height: 1.2;
}

.hero-title {
  min-height: 2.5rem;
  font-size: 1.75rem;
  font-weight: 500;
  color: var(--ink-muted);
}

.typing-cursor {
  color: var(--primary);
  animation: blink 0.7s infinite;
}

@keyframes blink {
  50% { opacity: 0; }
}

.hero-actions {
  display: flex;
  gap: 1rem;
  margin-top: 2rem;
}

/* === About === */
.about-content {
  display: grid;
  grid-template-columns: 1fr 2fr;
  gap: 3rem;
  align-items: center;
}

.about-image img {
  border-radius: 12px;
}

.about-text h3 {
  font-size: 1.5rem;
  margin-bottom: 1rem;
}

.about-details {
  margin: 1.5rem 0;
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0.5rem;
}

.cv-notice {
  margin-top: 1rem;
  color: var(--ink-muted);
  font-size: 0.9rem;
}

/* === Skills === */
.skills-content {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 2rem 3rem;
}

.skill-info {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.5rem;
  font-weight: 500;
}

.skill-bar {
  height: 10px;
  border-radius: 5px;
  background: var(--border);
  overflow: hidden;
}

.skill-progress {
  height: 100%;
  border-radius: 5px;
  background: var(--primary);
  transition: width 1s ease-in-out;
}

/* === Portfolio === */
.portfolio-filter {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 0.75rem;
  margin-bottom: 2.5rem;
}

.filter-btn {
  padding: 0.5rem 1.25rem;
  border: 1px solid var(--border);
  border-radius: 999px;
  background: var(--paper);
  font: inherit;
  cursor: pointer;
  transition: background var(--transition-normal), color var(--transition-normal);
}

.filter-btn:hover,
.filter-btn.active {
  background: var(--primary);
  border-color: var(--primary);
  color: var(--paper);
}

.portfolio-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
  gap: 2rem;
}

.portfolio-item {
  border-radius: 12px;
  overflow: hidden;
  transition: opacity var(--transition-normal), transform var(--transition-normal);
}

.portfolio-img {
  position: relative;
}

.portfolio-overlay {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  background: rgba(79, 70, 229, 0.85);
  color: var(--paper);
  text-align: center;
  opacity: 0;
  transition: opacity var(--transition-normal);
}

.portfolio-item:hover .portfolio-overlay {
  opacity: 1;
}

.portfolio-link {
  display: inline-block;
  margin-top: 0.75rem;
  padding: 0.4rem 1rem;
  border: 1px solid var(--paper);
  border-radius: 999px;
}

/* === Project Modal === */
.modal {
  position: fixed;
  inset: 0;
  z-index: 1000;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
  background: rgba(0, 0, 0, 0.7);
}

.modal-content {
  position: relative;
  width: min(900px, 100%);
  max-height: 90vh;
  overflow-y: auto;
  border-radius: 12px;
  background: var(--paper);
}

.modal-close {
  position: absolute;
  top: 1rem;
  right: 1rem;
}

.modal-body {
  padding: 2rem;
}

.modal-image {
  width: 100%;
  border-radius: 8px;
  margin-bottom: 1.5rem;
}

.modal-body h2 {
  margin-bottom: 1rem;
}

.modal-body h3 {
  margin: 1.5rem 0 0.5rem;
  font-size: 1.1rem;
}

.tech-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.5rem;
}

.tech-tag {
  padding: 0.25rem 0.75rem;
  border-radius: 999px;
  background: var(--primary-soft);
  color: var(--primary);
  font-size: 0.85rem;
}

.modal-body .btn {
  margin-top: 1.5rem;
}

/* === Testimonials === */
.testimonial-slider {
  max-width: 800px;
  margin: 0 auto;
  text-align: center;
}

.testimonial-item {
  display: none;
}

.testimonial-item.active {
  display: block;
  animation: fade-in 0.5s ease;
}

@keyframes fade-in {
  from { opacity: 0; }
  to { opacity: 1; }
}

.testimonial-text {
  font-size: 1.15rem;
  font-style: italic;
  margin-bottom: 1.5rem;
}

.testimonial-author p {
  color: var(--ink-muted);
}

.testimonial-controls {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 1rem;
  margin-top: 2rem;
}

.testimonial-dots {
  display: flex;
  gap: 0.5rem;
}

.dot {
  width: 12px;
  height: 12px;
  border-radius: 50%;
  background: var(--border);
  cursor: pointer;
  transition: background var(--transition-fast);
}

.dot.active {
  background: var(--primary);
}

/* === Contact === */
.contact-content {
  display: grid;
  grid-template-columns: 1fr 2fr;
  gap: 3rem;
}

.contact-item {
  margin-bottom: 1.5rem;
}

.contact-item p {
  color: var(--ink-muted);
}

.form-group {
  margin-bottom: 1rem;
}

.form-control {
  width: 100%;
  padding: 0.75rem 1rem;
  border: 1px solid var(--border);
  border-radius: 8px;
  font: inherit;
  transition: border-color var(--transition-fast);
}

.form-control:focus {
  outline: none;
  border-color: var(--primary);
}

.form-control.invalid {
  border-color: var(--danger);
}

.form-notice {
  margin-top: 1rem;
  font-weight: 500;
}

.form-notice.success {
  color: var(--success);
}

.form-notice.error {
  color: var(--danger);
}

/* === Footer === */
.footer {
  padding: 2rem 10%;
  text-align: center;
  background: var(--ink);
  color: var(--paper);
}

/* === Back To Top === */
.back-to-top {
  position: fixed;
  right: 2rem;
  bottom: 2rem;
  width: 45px;
  height: 45px;
  display: flex;
  align-items: center;
  justify-content: center;
  border-radius: 50%;
  background: var(--primary);
  color: var(--paper);
  opacity: 0;
  visibility: hidden;
  transition: opacity var(--transition-normal), visibility var(--transition-normal);
}

.back-to-top.active {
  opacity: 1;
  visibility: visible;
}

/* === Responsive === */
@media (max-width: 768px) {
  .hamburger {
    display: block;
  }

  .hamburger.active .bar:nth-child(1) {
    transform: translateY(8px) rotate(45deg);
  }

  .hamburger.active .bar:nth-child(2) {
    opacity: 0;
  }

  .hamburger.active .bar:nth-child(3) {
    transform: translateY(-8px) rotate(-45deg);
  }

  .nav-links {
    position: fixed;
    top: 70px;
    left: -100%;
    width: 100%;
    flex-direction: column;
    gap: 0;
    background: var(--paper);
    text-align: center;
    transition: left var(--transition-normal);
  }

  .nav-links.active {
    left: 0;
  }

  .nav-links li {
    padding: 1rem 0;
  }

  .about-content,
  .contact-content,
  .skills-content {
    grid-template-columns: 1fr;
  }

  .hero-name {
    font-size: 2.5rem;
  }
}
"#;
