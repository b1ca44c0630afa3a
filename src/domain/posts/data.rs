use time::macros::date;

use super::{Author, Post, PostId};

pub static POSTS: [Post; 6] = [
    Post {
        id: PostId::new(1),
        title: "Building Scalable Web Applications with Next.js and TypeScript",
        excerpt: "Learn how to create enterprise-grade applications using Next.js and TypeScript, with best practices for performance and maintainability.",
        body: "Next.js has become the go-to framework for building modern web applications.\n\nIts hybrid rendering model lets teams pick static generation, server rendering or client rendering per route, and TypeScript keeps large codebases honest as they grow. This article walks through the project conventions we settled on after shipping several enterprise applications: strict compiler options from day one, a thin data-access layer, and route-level code splitting as the default rather than the exception.",
        category: "Development",
        author: Author {
            name: "John Doe",
            avatar_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=john",
            role: "Senior Developer",
        },
        published_on: date!(2024 - 03 - 15),
        read_time: "8 min read",
        image_url: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6?ixlib=rb-4.0.3",
        tags: &["Next.js", "TypeScript", "React", "Performance"],
        views: 1520,
        likes: 89,
        featured: true,
    },
    Post {
        id: PostId::new(2),
        title: "Mastering Modern CSS: A Deep Dive into New Features",
        excerpt: "Explore the latest CSS features like Container Queries, Cascade Layers, and CSS Grid that are revolutionizing web development.",
        body: "CSS has evolved significantly over the past few years.\n\nContainer queries finally let components respond to the space they are given instead of the viewport, cascade layers bring order to specificity wars, and subgrid closes the last gaps in two-dimensional layout. We look at each feature with a practical example and note where fallbacks are still worth the effort.",
        category: "Design",
        author: Author {
            name: "Sarah Wilson",
            avatar_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=sarah",
            role: "UI/UX Designer",
        },
        published_on: date!(2024 - 03 - 14),
        read_time: "6 min read",
        image_url: "https://images.unsplash.com/photo-1507721999472-8ed4421c4af2?ixlib=rb-4.0.3",
        tags: &["CSS", "Web Design", "Frontend"],
        views: 982,
        likes: 45,
        featured: false,
    },
    Post {
        id: PostId::new(3),
        title: "Advanced State Management Patterns in React",
        excerpt: "Deep dive into modern state management solutions including Redux Toolkit, Zustand, and React Query.",
        body: "State management continues to be a crucial aspect of web development.\n\nThe ecosystem has quietly converged on a split between server cache state and client UI state, and the libraries that embrace that split are the ones that stay pleasant at scale. We compare Redux Toolkit, Zustand and React Query through that lens and sketch a decision guide for new projects.",
        category: "Development",
        author: Author {
            name: "Mike Johnson",
            avatar_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=mike",
            role: "Lead Developer",
        },
        published_on: date!(2024 - 03 - 13),
        read_time: "10 min read",
        image_url: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?ixlib=rb-4.0.3",
        tags: &["React", "Redux", "State Management"],
        views: 2341,
        likes: 167,
        featured: true,
    },
    Post {
        id: PostId::new(4),
        title: "Creating Responsive and Accessible Web Designs",
        excerpt: "Learn the principles of responsive design and accessibility to create websites that work for everyone.",
        body: "In today's mobile-first world, responsive design is more important than ever.\n\nBut responsiveness without accessibility only serves half your audience. This guide pairs each responsive technique with its accessible counterpart: fluid type with user zoom preserved, flexible grids with logical source order, and media queries that respect reduced-motion preferences.",
        category: "Design",
        author: Author {
            name: "Emma Davis",
            avatar_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=emma",
            role: "Accessibility Specialist",
        },
        published_on: date!(2024 - 03 - 12),
        read_time: "7 min read",
        image_url: "https://images.unsplash.com/photo-1517180102446-f3ece451e9d8?ixlib=rb-4.0.3",
        tags: &["Responsive Design", "Accessibility", "CSS"],
        views: 1123,
        likes: 72,
        featured: false,
    },
    Post {
        id: PostId::new(5),
        title: "Optimizing Web Performance: A Complete Guide",
        excerpt: "Comprehensive guide to improving your website's performance through various optimization techniques.",
        body: "Performance is a crucial aspect of user experience.\n\nWe start from the Core Web Vitals and work backwards: what actually moves largest contentful paint, why layout shift is usually a markup problem rather than a script problem, and how an interaction budget keeps regressions from creeping in. Each section ends with the measurement you should automate before you optimize.",
        category: "Performance",
        author: Author {
            name: "Alex Brown",
            avatar_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=alex",
            role: "Performance Engineer",
        },
        published_on: date!(2024 - 03 - 11),
        read_time: "12 min read",
        image_url: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?ixlib=rb-4.0.3",
        tags: &["Performance", "Optimization", "Web Vitals"],
        views: 3102,
        likes: 234,
        featured: true,
    },
    Post {
        id: PostId::new(6),
        title: "Building Accessible Web Applications",
        excerpt: "Learn how to create web applications that are accessible to everyone, including users with disabilities.",
        body: "Web accessibility is not just a nice-to-have feature.\n\nIt is a baseline requirement, and the good news is that most of it comes for free when you reach for semantic HTML before ARIA. We cover the landmarks every page needs, the handful of ARIA patterns worth memorizing, and how to fold keyboard and screen-reader passes into an ordinary review workflow.",
        category: "Accessibility",
        author: Author {
            name: "Chris Lee",
            avatar_url: "https://api.dicebear.com/7.x/avataaars/svg?seed=chris",
            role: "Frontend Developer",
        },
        published_on: date!(2024 - 03 - 10),
        read_time: "9 min read",
        image_url: "https://images.unsplash.com/photo-1573164713714-d95e436ab8d6?ixlib=rb-4.0.3",
        tags: &["Accessibility", "ARIA", "Semantic HTML"],
        views: 892,
        likes: 56,
        featured: false,
    },
];
