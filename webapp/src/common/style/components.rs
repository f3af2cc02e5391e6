pub const BASE_COMPONENTS: &str = r#"
/* Base Component Styles */

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  padding: var(--space-2) var(--space-4);
  border-radius: var(--radius-full);
  font-weight: 600;
  cursor: pointer;
  transition: transform var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard),
              border-color var(--transition-fast) var(--easing-standard);
  border: none;
}

.btn:focus-visible {
  outline: 2px solid var(--primary);
  outline-offset: 2px;
}

.btn-primary {
  background: var(--gradient);
  color: var(--text-inverse);
}

.btn-primary:hover {
  box-shadow: var(--shadow-lg);
  transform: scale(1.05);
}

.btn-secondary {
  background: transparent;
  color: var(--text-secondary);
  border: 2px solid var(--neutral-300);
}

.btn-secondary:hover {
  border-color: var(--primary);
  color: var(--primary);
}

.btn-lg {
  padding: var(--space-4) var(--space-8);
  font-size: 1.125rem;
}

.btn-block {
  width: 100%;
  padding: var(--space-4);
  border-radius: var(--radius-lg);
}

/* Form Elements */
.form-group {
  margin-bottom: var(--space-6);
}

.form-label {
  display: block;
  margin-bottom: var(--space-2);
  font-size: 0.875rem;
  font-weight: 500;
  color: var(--text-secondary);
}

.form-input {
  width: 100%;
  padding: var(--space-3) var(--space-4);
  border: 1px solid var(--neutral-300);
  border-radius: var(--radius-lg);
  background-color: var(--surface);
  color: var(--text-primary);
  font: inherit;
  transition: border-color var(--transition-fast) var(--easing-standard),
              box-shadow var(--transition-fast) var(--easing-standard);
}

textarea.form-input {
  resize: vertical;
}

.form-input:focus {
  border-color: var(--primary);
  box-shadow: 0 0 0 3px rgba(59, 130, 246, 0.3);
  outline: none;
}

.form-input.has-error {
  border-color: var(--error);
}

.form-error {
  margin-top: var(--space-1);
  font-size: 0.875rem;
  color: var(--error);
}

/* Banners */
.banner {
  margin-bottom: var(--space-6);
  padding: var(--space-4);
  border-radius: var(--radius-lg);
  border: 1px solid currentColor;
}

.banner-success {
  background-color: var(--success-surface);
  color: var(--success);
}

/* Tags */
.tag {
  display: inline-block;
  padding: var(--space-1) var(--space-3);
  border-radius: var(--radius-full);
  background-color: rgba(37, 99, 235, 0.12);
  color: var(--primary);
  font-size: 0.875rem;
  font-weight: 500;
}

/* Icons */
.icon {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  width: 2rem;
  height: 2rem;
  font-size: 1.25rem;
  line-height: 1;
}

.icon-code::before { content: "</>"; font-size: 1rem; font-weight: 700; }
.icon-palette::before { content: "🎨"; }
.icon-smartphone::before { content: "📱"; }
.icon-globe::before { content: "🌐"; }
.icon-database::before { content: "🗄"; }
.icon-users::before { content: "👥"; }
.icon-check-circle::before { content: "✔"; }
.icon-mail::before { content: "✉"; }
.icon-phone::before { content: "☎"; }
.icon-map-pin::before { content: "📍"; }
"#;
