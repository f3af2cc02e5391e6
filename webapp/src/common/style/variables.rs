pub const CSS_VARIABLES: &str = r#"
:root,
.site[data-theme="light"] {
  /* Color System */
  --primary: #2563EB;
  --primary-light: #60A5FA;
  --primary-dark: #1D4ED8;
  --accent: #9333EA;
  --gradient: linear-gradient(90deg, var(--primary), var(--accent));

  /* Neutrals */
  --neutral-50: #F9FAFB;
  --neutral-100: #F3F4F6;
  --neutral-200: #E5E7EB;
  --neutral-300: #D1D5DB;
  --neutral-400: #9CA3AF;
  --neutral-500: #6B7280;
  --neutral-600: #4B5563;
  --neutral-700: #374151;
  --neutral-800: #1F2937;
  --neutral-900: #111827;

  /* Semantic Colors */
  --success: #15803D;
  --success-surface: #DCFCE7;
  --error: #DC2626;

  /* Background and Surface Colors */
  --background: #FFFFFF;
  --background-alt: var(--neutral-50);
  --surface: #FFFFFF;
  --hero-background: linear-gradient(135deg, #EFF6FF, #FFFFFF 50%, #FAF5FF);

  /* Text Colors */
  --text-primary: var(--neutral-900);
  --text-secondary: var(--neutral-600);
  --text-inverse: #FFFFFF;

  /* Border Colors */
  --border: var(--neutral-200);

  /* Layout */
  --header-height: 72px;
  --container-width: 1152px;

  /* Spacing System */
  --space-1: 4px;
  --space-2: 8px;
  --space-3: 12px;
  --space-4: 16px;
  --space-6: 24px;
  --space-8: 32px;
  --space-12: 48px;
  --space-16: 64px;
  --space-20: 80px;

  /* Border Radius */
  --radius-md: 6px;
  --radius-lg: 8px;
  --radius-xl: 12px;
  --radius-full: 9999px;

  /* Shadows */
  --shadow-sm: 0 1px 2px 0 rgba(0, 0, 0, 0.05);
  --shadow-lg: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
  --shadow-xl: 0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04);

  /* Animation */
  --transition-fast: 150ms;
  --transition-normal: 300ms;
  --easing-standard: cubic-bezier(0.4, 0.0, 0.2, 1);
}

.site[data-theme="dark"] {
  --primary: #60A5FA;
  --primary-dark: #3B82F6;
  --accent: #C084FC;

  --success: #86EFAC;
  --success-surface: rgba(22, 163, 74, 0.2);
  --error: #F87171;

  --background: var(--neutral-900);
  --background-alt: #0B1120;
  --surface: var(--neutral-800);
  --hero-background: linear-gradient(135deg, #172554, var(--neutral-900) 50%, #3B0764);

  --text-primary: var(--neutral-50);
  --text-secondary: var(--neutral-400);

  --border: var(--neutral-700);
}"#;
