pub const LANDING_STYLES: &str = r#"
/* Landing Page Styles */

section {
  scroll-margin-top: var(--header-height);
}

.page-section {
  padding: var(--space-20) 0;
  background-color: var(--background);
}

.page-section.alt {
  background-color: var(--background-alt);
}

.section-header {
  text-align: center;
  margin-bottom: var(--space-16);
}

.section-title {
  font-size: 2.25rem;
  font-weight: 700;
  margin-bottom: var(--space-6);
  color: var(--text-primary);
}

.section-lead {
  font-size: 1.25rem;
  max-width: 48rem;
  margin: 0 auto;
  color: var(--text-secondary);
}

/* Hero */
.hero {
  min-height: 100vh;
  display: flex;
  align-items: center;
  padding-top: var(--header-height);
  background: var(--hero-background);
  text-align: center;
}

.hero-content {
  max-width: 56rem;
  margin: 0 auto;
  padding: var(--space-20) 0;
}

.hero-title {
  font-size: 3.75rem;
  font-weight: 700;
  margin-bottom: var(--space-6);
  color: var(--text-primary);
}

.hero-highlight {
  background: var(--gradient);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.hero-subtitle {
  font-size: 1.5rem;
  margin-bottom: var(--space-8);
  color: var(--text-secondary);
}

.hero-actions {
  display: flex;
  gap: var(--space-4);
  justify-content: center;
  flex-wrap: wrap;
}

/* Cards */
.values-grid,
.card-grid {
  display: grid;
  gap: var(--space-8);
  grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
}

.value-card {
  text-align: center;
  padding: var(--space-6);
  border-radius: var(--radius-xl);
}

.value-icon {
  width: 4rem;
  height: 4rem;
  margin: 0 auto var(--space-4);
  border-radius: var(--radius-full);
  color: var(--text-inverse);
}

.card-title {
  font-size: 1.25rem;
  font-weight: 600;
  margin-bottom: var(--space-3);
  color: var(--text-primary);
}

.card-text {
  color: var(--text-secondary);
  line-height: 1.6;
}

.service-card {
  padding: var(--space-8);
  border-radius: var(--radius-xl);
  border: 1px solid var(--border);
  background-color: var(--surface);
  box-shadow: var(--shadow-lg);
  transition: box-shadow var(--transition-normal) var(--easing-standard);
}

.service-card:hover {
  box-shadow: var(--shadow-xl);
}

.service-icon {
  margin-bottom: var(--space-4);
  color: var(--primary);
}

.project-card {
  border-radius: var(--radius-xl);
  overflow: hidden;
  background-color: var(--surface);
  box-shadow: var(--shadow-lg);
  transition: transform var(--transition-normal) var(--easing-standard);
}

.project-card:hover {
  transform: scale(1.05);
}

.project-image {
  position: relative;
  overflow: hidden;
}

.project-image img {
  display: block;
  width: 100%;
  height: 12rem;
  object-fit: cover;
  transition: transform var(--transition-normal) var(--easing-standard);
}

.project-card:hover .project-image img {
  transform: scale(1.1);
}

.project-overlay {
  position: absolute;
  inset: 0;
  background: linear-gradient(to top, rgba(0, 0, 0, 0.5), transparent);
  opacity: 0;
  transition: opacity var(--transition-normal) var(--easing-standard);
}

.project-card:hover .project-overlay {
  opacity: 1;
}

.project-body {
  padding: var(--space-6);
}

.tag-list {
  display: flex;
  flex-wrap: wrap;
  gap: var(--space-2);
}

/* Contact */
.contact-grid {
  display: grid;
  gap: var(--space-12);
  grid-template-columns: repeat(auto-fit, minmax(320px, 1fr));
  max-width: 56rem;
  margin: 0 auto;
}

.contact-heading {
  font-size: 1.5rem;
  font-weight: 600;
  margin-bottom: var(--space-6);
  color: var(--text-primary);
}

.contact-details {
  list-style: none;
  margin-bottom: var(--space-8);
}

.contact-details li {
  display: flex;
  align-items: center;
  gap: var(--space-3);
  margin-bottom: var(--space-4);
  color: var(--text-secondary);
}

.contact-details .icon {
  color: var(--primary);
}

/* Social */
.social-links {
  display: flex;
  gap: var(--space-4);
}

.social-link {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2.5rem;
  height: 2.5rem;
  border-radius: var(--radius-full);
  color: var(--neutral-400);
  font-weight: 700;
}

.social-link:hover {
  color: var(--text-inverse);
  text-decoration: none;
}

.social-link-filled {
  color: var(--text-inverse);
  background-color: var(--neutral-800);
}

.social-link-filled.social-linkedin {
  background-color: var(--primary);
}

.social-linkedin::before { content: "in"; }
.social-github::before { content: "GH"; font-size: 0.75rem; }

/* Footer */
.site-footer {
  padding: var(--space-12) 0;
  background-color: var(--neutral-900);
  color: var(--text-inverse);
  text-align: center;
}

.footer-logo {
  justify-content: center;
  margin-bottom: var(--space-6);
}

.footer-tagline {
  max-width: 42rem;
  margin: 0 auto var(--space-6);
  color: var(--neutral-400);
}

.site-footer .social-links {
  justify-content: center;
  margin-bottom: var(--space-8);
}

.footer-bottom {
  padding-top: var(--space-8);
  border-top: 1px solid var(--neutral-800);
  color: var(--neutral-400);
}

@media (max-width: 768px) {
  .hero-title {
    font-size: 2.25rem;
  }

  .hero-subtitle {
    font-size: 1.25rem;
  }

  .section-title {
    font-size: 1.875rem;
  }
}
"#;
