use constcat::concat;

mod components;
mod landing;
mod variables;

pub use components::BASE_COMPONENTS;
pub use landing::LANDING_STYLES;
pub use variables::CSS_VARIABLES;

// everything the page needs, bundled into one style element
pub const SITE_STYLES: &str = concat!(
    r#"
/* Global resets and base styles */
* {
  margin: 0;
  padding: 0;
  box-sizing: border-box;
}

body {
  font-family: system-ui, -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, Cantarell, sans-serif;
  line-height: 1.5;
}

a {
  color: var(--primary);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

button {
  font: inherit;
}
"#,
    CSS_VARIABLES,
    BASE_COMPONENTS,
    LANDING_STYLES,
r#"
/* Application-specific styles */
.site {
  min-height: 100vh;
  color: var(--text-primary);
  background-color: var(--background);
}

.container {
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.app-header {
  position: fixed;
  top: 0;
  width: 100%;
  z-index: 50;
  background-color: var(--surface);
  box-shadow: var(--shadow-lg);
}

.nav-container {
  display: flex;
  height: var(--header-height);
  align-items: center;
  justify-content: space-between;
  max-width: var(--container-width);
  margin: 0 auto;
  padding: 0 var(--space-4);
}

.logo {
  display: flex;
  align-items: center;
  font-size: 1.5rem;
  font-weight: 700;
}

.logo-mark {
  color: var(--primary);
}

.nav-links {
  display: flex;
  gap: var(--space-8);
}

.nav-link {
  background: none;
  border: none;
  border-bottom: 2px solid transparent;
  cursor: pointer;
  color: var(--text-secondary);
  font-weight: 500;
  padding: var(--space-1) var(--space-2);
  transition: color var(--transition-fast) var(--easing-standard);
}

.nav-link:hover {
  color: var(--primary);
}

.nav-link.active {
  color: var(--primary);
  border-bottom-color: var(--primary);
}

.nav-actions {
  display: flex;
  gap: var(--space-2);
}

.theme-toggle,
.menu-toggle {
  background: none;
  border: none;
  cursor: pointer;
  padding: var(--space-2);
  border-radius: var(--radius-lg);
  color: var(--text-primary);
  font-size: 1.25rem;
}

.menu-toggle {
  display: none;
}

.mobile-menu {
  display: none;
  flex-direction: column;
  gap: var(--space-2);
  padding: var(--space-4);
  border-top: 1px solid var(--border);
}

.nav-link-mobile {
  text-align: left;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-lg);
}

@media (max-width: 768px) {
  .nav-links {
    display: none;
  }

  .menu-toggle {
    display: inline-flex;
  }

  .mobile-menu {
    display: flex;
  }
}
"#
);
